use crate::domain::model::{NavigationRequest, Page};

/// `a[href^="#"]` 點擊：目標存在時平滑捲動過去
pub fn scroll_request(page: &Page, href: &str) -> Option<NavigationRequest> {
    let target_id = href.strip_prefix('#')?;
    if target_id.is_empty() || !page.has_element_id(target_id) {
        tracing::debug!("Anchor '{}' has no target", href);
        return None;
    }

    Some(NavigationRequest::ScrollIntoView {
        target_id: target_id.to_string(),
        smooth: true,
    })
}
