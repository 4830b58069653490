use anyhow::Context;
use clap::Parser;
use site_behavior::domain::model::FilterControl;
use site_behavior::utils::{logger, validation::Validate};
use site_behavior::{
    load_page, submitter_from_config, BehaviorConfig, CliConfig, PageController, PageEvent,
    RecordingNavigator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting site-behavior preview");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入配置，命令列參數優先
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            BehaviorConfig::from_file(path)?
        }
        None => BehaviorConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.form.endpoint = Some(endpoint.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let html = std::fs::read_to_string(&cli.page)
        .with_context(|| format!("failed to read page '{}'", cli.page))?;
    let page = load_page(&html, &cli.url)?;

    let submitter = submitter_from_config(&config)?;
    let navigator = RecordingNavigator::new();
    let mut controller = PageController::new(page, config, navigator.clone(), submitter);

    controller.on_dom_ready();
    controller.on_load();

    let filter_values = [
        (FilterControl::Location, &cli.location),
        (FilterControl::MinPrice, &cli.min_price),
        (FilterControl::MaxPrice, &cli.max_price),
    ];
    for (control, value) in filter_values {
        if let Some(value) = value {
            controller.dispatch(PageEvent::FilterChange {
                control,
                value: value.clone(),
            });
        }
    }

    let mut submissions = Vec::new();
    for raw in &cli.events {
        let event: PageEvent = raw.parse()?;
        let outcome = controller.dispatch(event);
        if !outcome.handled {
            tracing::warn!("⚠️ Event '{}' had no listener", raw);
        }
        submissions.extend(outcome.submission);
    }

    // 等待背景送出完成，讓日誌完整
    for submission in submissions {
        if let Err(e) = submission.await {
            tracing::warn!("Submission task ended abnormally: {}", e);
        }
    }

    let output = serde_json::json!({
        "snapshot": controller.snapshot(),
        "navigation": navigator.requests(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    tracing::info!("✅ Preview completed");
    Ok(())
}
