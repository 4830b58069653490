// Adapters layer: concrete implementations for external systems (markup, http, navigation).

pub mod markup;
pub mod navigator;
pub mod webhook;
