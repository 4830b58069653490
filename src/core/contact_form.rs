use crate::domain::model::ContactPayload;
use crate::domain::ports::FormSubmitter;
use crate::utils::error::{Result, SiteError};
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We will contact you soon.";
pub const SERVICE_FALLBACK: &str = "Not specified";

const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 依序檢查必填欄位與 email 格式，第一個失敗即回傳
pub fn validate_submission(values: &HashMap<String, String>) -> Result<()> {
    let missing = REQUIRED_FIELDS
        .iter()
        .any(|field| values.get(*field).map_or(true, |value| value.is_empty()));
    if missing {
        return Err(SiteError::validation(REQUIRED_FIELDS_MESSAGE));
    }

    let email = values.get("email").map(String::as_str).unwrap_or_default();
    if !is_valid_email(email) {
        return Err(SiteError::validation(INVALID_EMAIL_MESSAGE));
    }

    Ok(())
}

/// `M/D/YYYY, h:mm:ss AM` 格式的本地時間
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn build_payload(values: &HashMap<String, String>, at: &DateTime<Local>) -> ContactPayload {
    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
    let service = field("service");

    ContactPayload {
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        service: if service.is_empty() {
            SERVICE_FALLBACK.to_string()
        } else {
            service
        },
        message: field("message"),
        timestamp: format_timestamp(at),
    }
}

/// 送出表單內容，失敗只記錄日誌，不影響使用者看到的結果
pub async fn deliver(submitter: Arc<dyn FormSubmitter>, payload: ContactPayload) {
    match submitter.submit(&payload).await {
        Ok(()) => tracing::info!("📨 Contact form delivered for {}", payload.email),
        Err(e) => tracing::warn!(
            "Contact form delivery skipped ({:?}): {}",
            e.category(),
            e
        ),
    }
}
