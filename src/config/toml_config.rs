use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hello, I am interested in your services.";

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub form: FormConfig,
    pub navigation: NavigationConfig,
    pub toasts: ToastConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// 表單 webhook，例如 Apps Script 部署網址
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub dropdown_hide_delay_ms: u64,
    pub default_page: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            dropdown_hide_delay_ms: 100,
            default_page: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub lifetime_ms: u64,
    pub exit_animation_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 3000,
            exit_animation_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub whatsapp_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub offset_px: u32,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            offset_px: 20,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FORM_SCRIPT_ID})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(endpoint) = &self.form.endpoint {
            validation::validate_url("form.endpoint", endpoint)?;
        }
        validation::validate_positive_number("form.timeout_seconds", self.form.timeout_seconds, 1)?;
        validation::validate_positive_number(
            "navigation.dropdown_hide_delay_ms",
            self.navigation.dropdown_hide_delay_ms,
            1,
        )?;
        validation::validate_non_empty_string(
            "navigation.default_page",
            &self.navigation.default_page,
        )?;
        validation::validate_positive_number("toasts.lifetime_ms", self.toasts.lifetime_ms, 1)?;
        validation::validate_non_empty_string(
            "contact.whatsapp_message",
            &self.contact.whatsapp_message,
        )?;
        validation::validate_range("reveal.threshold", self.reveal.threshold, 0.0, 1.0)?;

        // 未替換的 ${VAR} 代表環境沒有提供
        if let Some(endpoint) = &self.form.endpoint {
            if ENV_VAR_PATTERN.is_match(endpoint) {
                return Err(SiteError::ConfigValidationError {
                    field: "form.endpoint".to_string(),
                    message: format!("Unresolved environment variable in '{}'", endpoint),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for BehaviorConfig {
    fn form_endpoint(&self) -> Option<&str> {
        self.form.endpoint.as_deref().filter(|e| !e.trim().is_empty())
    }

    fn form_timeout(&self) -> Duration {
        Duration::from_secs(self.form.timeout_seconds)
    }

    fn dropdown_hide_delay(&self) -> Duration {
        Duration::from_millis(self.navigation.dropdown_hide_delay_ms)
    }

    fn default_page(&self) -> &str {
        &self.navigation.default_page
    }

    fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toasts.lifetime_ms)
    }

    fn toast_exit_animation(&self) -> Duration {
        Duration::from_millis(self.toasts.exit_animation_ms)
    }

    fn whatsapp_message(&self) -> &str {
        &self.contact.whatsapp_message
    }

    fn reveal_threshold(&self) -> f64 {
        self.reveal.threshold
    }

    fn reveal_offset_px(&self) -> u32 {
        self.reveal.offset_px
    }

    fn reveal_transition(&self) -> &str {
        &self.reveal.transition
    }
}

impl Validate for BehaviorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
