//! Browser-facing services: configuration, errors, the `web-sys` host adapter
//! and service worker registration.

pub mod browser;
pub mod config;
pub mod errors;
pub mod service_worker;

pub use browser::BrowserHost;
pub use service_worker::{register_service_worker, RegistrationOutcome, ServiceWorkerHost};
