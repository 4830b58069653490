use crate::domain::model::MenuVisibility;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// 單一下拉選單的顯示狀態機：Shown / Hidden，離開時延遲隱藏，可被再次進入取消。
pub struct DropdownController {
    label: String,
    hide_delay: Duration,
    state: Arc<watch::Sender<MenuVisibility>>,
    pending_hide: Option<JoinHandle<()>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub label: String,
    pub visibility: MenuVisibility,
    pub display: &'static str,
    pub opacity: &'static str,
    pub css_visibility: &'static str,
}

impl DropdownController {
    pub fn new(label: impl Into<String>, hide_delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(MenuVisibility::Hidden);
        Self {
            label: label.into(),
            hide_delay,
            state: Arc::new(tx),
            pending_hide: None,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.cancel_pending_hide();
        self.state.send_replace(MenuVisibility::Shown);
        tracing::debug!("Dropdown '{}' shown", self.label);
    }

    /// 必須在 tokio runtime 內呼叫
    pub fn pointer_leave(&mut self) {
        self.cancel_pending_hide();

        let state = Arc::clone(&self.state);
        let delay = self.hide_delay;
        let label = self.label.clone();
        self.pending_hide = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_replace(MenuVisibility::Hidden);
            tracing::debug!("Dropdown '{}' hidden after {:?}", label, delay);
        }));
    }

    pub fn visibility(&self) -> MenuVisibility {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<MenuVisibility> {
        self.state.subscribe()
    }

    pub fn view(&self) -> DropdownView {
        let visibility = self.visibility();
        DropdownView {
            label: self.label.clone(),
            visibility,
            display: visibility.display(),
            opacity: visibility.opacity(),
            css_visibility: visibility.visibility(),
        }
    }

    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.abort();
        }
    }
}

impl Drop for DropdownController {
    fn drop(&mut self) {
        self.cancel_pending_hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_enter_shows_immediately() {
        let mut dropdown = DropdownController::new("Services", Duration::from_millis(100));
        assert_eq!(dropdown.visibility(), MenuVisibility::Hidden);

        dropdown.pointer_enter();
        assert_eq!(dropdown.visibility(), MenuVisibility::Shown);
        assert_eq!(dropdown.view().display, "flex");
    }

    #[tokio::test(start_paused = true)]
    async fn test_leave_hides_after_delay() {
        let mut dropdown = DropdownController::new("Services", Duration::from_millis(100));
        dropdown.pointer_enter();
        dropdown.pointer_leave();

        sleep(Duration::from_millis(50)).await;
        assert_eq!(dropdown.visibility(), MenuVisibility::Shown);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(dropdown.visibility(), MenuVisibility::Hidden);
        let view = dropdown.view();
        assert_eq!((view.display, view.opacity, view.css_visibility), ("none", "0", "hidden"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenter_within_delay_never_hides() {
        let mut dropdown = DropdownController::new("Services", Duration::from_millis(100));
        let mut changes = dropdown.subscribe();
        dropdown.pointer_enter();
        changes.borrow_and_update();

        dropdown.pointer_leave();
        sleep(Duration::from_millis(99)).await;
        dropdown.pointer_enter();
        changes.borrow_and_update();

        sleep(Duration::from_millis(500)).await;
        assert_eq!(dropdown.visibility(), MenuVisibility::Shown);
        assert!(!changes.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_leave_replaces_timer() {
        let mut dropdown = DropdownController::new("Services", Duration::from_millis(100));
        dropdown.pointer_enter();
        dropdown.pointer_leave();
        sleep(Duration::from_millis(80)).await;
        dropdown.pointer_enter();
        dropdown.pointer_leave();

        sleep(Duration::from_millis(80)).await;
        assert_eq!(dropdown.visibility(), MenuVisibility::Shown);

        sleep(Duration::from_millis(40)).await;
        assert_eq!(dropdown.visibility(), MenuVisibility::Hidden);
    }
}
