//! This crate contains the PWA bootstrap: service worker registration, the iOS
//! standalone refresh workaround and the install prompt flow.

pub mod app;
pub use app::{start, PwaShell};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use services::config::PwaConfig;
pub use services::errors::{PwaError, PwaResult};
