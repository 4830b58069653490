use crate::domain::model::{NavMenu, Page};
use url::Url;

/// 取出目前網址的最後一段路徑，空字串時回傳預設頁面
pub fn current_page(location: &str, default_page: &str) -> String {
    let parsed = Url::parse(location)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(location)));

    let segment = match parsed {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_string))
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Unparseable location '{}': {}", location, e);
            location.rsplit('/').next().unwrap_or_default().to_string()
        }
    };

    if segment.is_empty() {
        default_page.to_string()
    } else {
        segment
    }
}

/// 重新標記 active 連結，回傳第一個被標記的索引
pub fn set_active_nav(menu: &mut NavMenu, location: &str, default_page: &str) -> Option<usize> {
    let page = current_page(location, default_page);
    let mut first_active = None;

    for (index, link) in menu.links.iter_mut().enumerate() {
        link.active = link.href.as_deref() == Some(page.as_str());
        if link.active && first_active.is_none() {
            first_active = Some(index);
        }
    }

    tracing::debug!("Active nav for '{}': {:?}", page, first_active);
    first_active
}

/// 漢堡按鈕：切換選單展開狀態。缺少任何一個元素時不動作。
pub fn toggle_menu(page: &mut Page) -> bool {
    if !page.has_hamburger {
        return false;
    }
    match page.nav_menu.as_mut() {
        Some(menu) => {
            menu.open = !menu.open;
            true
        }
        None => false,
    }
}

/// 點擊導覽連結：收起選單並重新計算 active
pub fn follow_nav_link(page: &mut Page, index: usize, default_page: &str) -> bool {
    let location = page.location.clone();
    let Some(menu) = page.nav_menu.as_mut() else {
        return false;
    };
    if index >= menu.links.len() {
        return false;
    }

    menu.open = false;
    set_active_nav(menu, &location, default_page);
    true
}
