#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub mod toml_config;

pub use toml_config::BehaviorConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-behavior")]
#[command(about = "Preview the page behavior layer against a static HTML page")]
pub struct CliConfig {
    /// HTML page to load
    pub page: String,

    /// Location the page is served from (full URL or path)
    #[arg(long, default_value = "/index.html")]
    pub url: String,

    /// Optional TOML behavior configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the contact form webhook endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Location filter value
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// Events to dispatch after load, e.g. `faq:0`, `field:name=Ann`, `submit`
    #[arg(short, long = "event")]
    pub events: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
