use crate::domain::model::{ContactPayload, NavigationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// 未設定時表單只做本地處理
    fn form_endpoint(&self) -> Option<&str>;
    fn form_timeout(&self) -> Duration;
    fn dropdown_hide_delay(&self) -> Duration;
    fn default_page(&self) -> &str;
    fn toast_lifetime(&self) -> Duration;
    fn toast_exit_animation(&self) -> Duration;
    fn whatsapp_message(&self) -> &str;
    fn reveal_threshold(&self) -> f64;
    fn reveal_offset_px(&self) -> u32;
    fn reveal_transition(&self) -> &str;
}

/// 聯絡表單的遠端送出端點
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<()>;
}

/// 瀏覽器導覽能力：開新視窗、改變目前位置、捲動
pub trait Navigator: Send + Sync {
    fn navigate(&self, request: NavigationRequest);
}
