use crate::domain::model::ContactPayload;
use crate::domain::ports::{ConfigProvider, FormSubmitter};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// 將聯絡表單 POST 到外部 webhook (例如試算表的 Apps Script)
pub struct WebhookSubmitter {
    client: Client,
    endpoint: String,
}

impl WebhookSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl FormSubmitter for WebhookSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<()> {
        tracing::debug!("Posting contact form to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        if !status.is_success() {
            return Err(SiteError::ApiStatusError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// 沒有設定 endpoint 時使用
#[derive(Debug, Clone, Default)]
pub struct SkippedSubmitter;

#[async_trait]
impl FormSubmitter for SkippedSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<()> {
        tracing::info!(
            "Contact form submission skipped (not configured) for {}",
            payload.email
        );
        Ok(())
    }
}

/// 依配置選擇送出方式
pub fn submitter_from_config<C: ConfigProvider>(config: &C) -> Result<Arc<dyn FormSubmitter>> {
    match config.form_endpoint() {
        Some(endpoint) => Ok(Arc::new(WebhookSubmitter::new(
            endpoint,
            config.form_timeout(),
        )?)),
        None => Ok(Arc::new(SkippedSubmitter)),
    }
}
