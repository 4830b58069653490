pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::markup::load_page;
pub use adapters::navigator::{LoggingNavigator, RecordingNavigator};
pub use adapters::webhook::{submitter_from_config, SkippedSubmitter, WebhookSubmitter};
pub use config::BehaviorConfig;
pub use core::controller::{EventOutcome, PageController, PageEvent, PageSnapshot};
pub use utils::error::{Result, SiteError};
