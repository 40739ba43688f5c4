//! Service worker registration.
//!
//! Registration is fire-and-forget: failures are logged and never surface to the
//! rest of the bootstrap.

use crate::services::config::PwaConfig;
use crate::services::errors::{PwaError, PwaResult};
use crate::{console_error, console_info, console_debug};
use async_trait::async_trait;

/// The part of `navigator` the registration needs.
#[async_trait(?Send)]
pub trait ServiceWorkerHost {
    /// `'serviceWorker' in navigator`
    fn supports_service_worker(&self) -> bool;

    /// Register `script_url` and resolve to the registration scope.
    async fn register_service_worker(
        &self,
        script_url: &str,
        scope: Option<&str>,
    ) -> PwaResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The runtime has no service worker support; nothing was attempted
    Unsupported,
    Registered { scope: String },
    Failed { error: PwaError },
}

pub async fn register_service_worker<H>(host: &H, config: &PwaConfig) -> RegistrationOutcome
where
    H: ServiceWorkerHost + ?Sized,
{
    if !host.supports_service_worker() {
        console_debug!("Service workers not supported, skipping registration");
        return RegistrationOutcome::Unsupported;
    }

    let scope = config.service_worker_scope.as_deref();
    match host
        .register_service_worker(&config.service_worker_url, scope)
        .await
    {
        Ok(scope) => {
            if config.log_registration_success {
                console_info!("Service Worker registered with scope: {}", scope);
            }
            RegistrationOutcome::Registered { scope }
        }
        Err(error) => {
            console_error!("Service Worker registration failed: {}", error);
            RegistrationOutcome::Failed { error }
        }
    }
}
