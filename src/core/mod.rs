pub mod anchors;
pub mod contact_buttons;
pub mod contact_form;
pub mod controller;
pub mod dropdown;
pub mod faq;
pub mod filters;
pub mod navigation;
pub mod scroll_reveal;
pub mod toast;

pub use crate::domain::model::{ContactPayload, NavigationRequest, Page};
pub use crate::domain::ports::{ConfigProvider, FormSubmitter, Navigator};
pub use crate::utils::error::Result;
