use crate::domain::model::{Toast, ToastKind, ToastPhase};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Toast 進出場動畫，於頁面載入時注入 `<head>`
pub const TOAST_KEYFRAMES: &str = "@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}";

pub struct ToastBoard {
    toasts: Arc<watch::Sender<Vec<Toast>>>,
    next_id: AtomicU64,
    lifetime: Duration,
    exit_animation: Duration,
}

impl ToastBoard {
    pub fn new(lifetime: Duration, exit_animation: Duration) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            toasts: Arc::new(tx),
            next_id: AtomicU64::new(1),
            lifetime,
            exit_animation,
        }
    }

    /// 顯示 toast，時間到後自動退場並移除。回傳的 handle 只供觀察，不能取消。
    /// 必須在 tokio runtime 內呼叫
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> JoinHandle<()> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Showing,
        };
        tracing::debug!("Toast #{} ({}): {}", id, kind.as_str(), toast.message);
        self.toasts.send_modify(|toasts| toasts.push(toast));

        let toasts = Arc::clone(&self.toasts);
        let lifetime = self.lifetime;
        let exit_animation = self.exit_animation;
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            toasts.send_modify(|toasts| {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.phase = ToastPhase::Leaving;
                }
            });

            tokio::time::sleep(exit_animation).await;
            toasts.send_modify(|toasts| toasts.retain(|t| t.id != id));
        })
    }

    pub fn active(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}
