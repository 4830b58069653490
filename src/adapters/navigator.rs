use crate::domain::model::NavigationRequest;
use crate::domain::ports::Navigator;
use std::sync::{Arc, Mutex};

/// 只記錄導覽請求的 navigator
#[derive(Debug, Clone, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        match &request {
            NavigationRequest::OpenNewContext { url } => {
                tracing::info!("🔗 Opening new window: {}", url)
            }
            NavigationRequest::Assign { url } => tracing::info!("🔗 Navigating to: {}", url),
            NavigationRequest::ScrollIntoView { target_id, .. } => {
                tracing::info!("🔗 Scrolling to #{}", target_id)
            }
        }
    }
}

/// 保留所有導覽請求，供預覽輸出與測試檢查
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    requests: Arc<Mutex<Vec<NavigationRequest>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        LoggingNavigator.navigate(request.clone());
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}
