use crate::domain::model::{ContactAction, NavigationRequest};

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

pub fn call_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// 將按鈕動作轉成導覽請求；WhatsApp 開新視窗，電話改變目前位置
pub fn navigation_for(action: &ContactAction, default_message: &str) -> NavigationRequest {
    match action {
        ContactAction::WhatsApp { phone, message } => {
            let message = message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(default_message);
            NavigationRequest::OpenNewContext {
                url: whatsapp_link(phone, message),
            }
        }
        ContactAction::Call { phone } => NavigationRequest::Assign {
            url: call_link(phone),
        },
    }
}
