use anyhow::Result;
use site_behavior::domain::model::{MenuVisibility, NavigationRequest};
use site_behavior::utils::validation::Validate;
use site_behavior::{
    load_page, submitter_from_config, BehaviorConfig, PageController, PageEvent,
    RecordingNavigator,
};
use std::time::Duration;
use tempfile::TempDir;

const PAGE: &str = r##"
<ul class="nav-menu">
  <li class="dropdown"><a href="areas.html">Areas</a><div class="dropdown-menu"></div></li>
</ul>
<a href="#" data-whatsapp="61255501234">Chat</a>
<div class="blog-card"></div>
"##;

/// 從 TOML 檔案載入配置並套用到頁面行為
#[tokio::test(start_paused = true)]
async fn test_config_file_drives_behaviors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        r#"
[navigation]
dropdown_hide_delay_ms = 400

[contact]
whatsapp_message = "Hi, is this still available?"

[reveal]
offset_px = 40
"#,
    )?;

    let config = BehaviorConfig::from_file(&config_path)?;
    config.validate()?;

    let submitter = submitter_from_config(&config)?;
    let navigator = RecordingNavigator::new();
    let page = load_page(PAGE, "https://example.com/areas.html")?;
    let mut controller = PageController::new(page, config, navigator.clone(), submitter);
    controller.on_dom_ready();
    controller.on_load();

    controller.dispatch(PageEvent::ContactButtonClick(0));
    assert_eq!(
        navigator.requests(),
        vec![NavigationRequest::OpenNewContext {
            url: "https://wa.me/61255501234?text=Hi%2C%20is%20this%20still%20available%3F"
                .to_string()
        }]
    );

    assert_eq!(
        controller.page().reveal_targets[0].style.transform.as_deref(),
        Some("translateY(40px)")
    );

    controller.dispatch(PageEvent::DropdownEnter(0));
    controller.dispatch(PageEvent::DropdownLeave(0));
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(controller.dropdown(0).unwrap().visibility(), MenuVisibility::Shown);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.dropdown(0).unwrap().visibility(), MenuVisibility::Hidden);

    let snapshot = serde_json::to_value(controller.snapshot())?;
    assert_eq!(snapshot["current_page"], "areas.html");
    assert_eq!(snapshot["dropdowns"][0]["display"], "none");
    assert!(snapshot["page"]["nav_menu"]["links"][0]["active"].as_bool().unwrap());

    Ok(())
}

#[tokio::test]
async fn test_events_parsed_from_text() -> Result<()> {
    let page = load_page(PAGE, "/index.html")?;
    let navigator = RecordingNavigator::new();
    let config = BehaviorConfig::default();
    let submitter = submitter_from_config(&config)?;
    let mut controller = PageController::new(page, config, navigator.clone(), submitter);
    controller.on_dom_ready();
    controller.on_load();

    for raw in ["button:0", "reveal:0", "faq:0"] {
        let event: PageEvent = raw.parse()?;
        controller.dispatch(event);
    }

    assert_eq!(navigator.requests().len(), 1);
    assert!(controller.page().reveal_targets[0].revealed);
    Ok(())
}
