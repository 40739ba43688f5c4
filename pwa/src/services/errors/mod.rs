use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PwaError {
    #[error("Browser API unavailable: {api}")]
    BrowserApiUnavailable { api: String },

    #[error("Service worker registration failed: {script_url} - {reason}")]
    Registration { script_url: String, reason: String },

    #[error("Page reload failed: {reason}")]
    Reload { reason: String },

    #[error("Install prompt error: {reason}")]
    InstallPrompt { reason: String },

    #[error("Event listener error: {event} - {reason}")]
    Listener { event: String, reason: String },

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

pub type PwaResult<T> = Result<T, PwaError>;

impl PwaError {
    pub fn api_unavailable(api: &str) -> Self {
        PwaError::BrowserApiUnavailable {
            api: api.to_string(),
        }
    }

    pub fn install_prompt(reason: impl Into<String>) -> Self {
        PwaError::InstallPrompt {
            reason: reason.into(),
        }
    }

    /// Errors that only mean "this browser can't do it", as opposed to a call that failed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PwaError::BrowserApiUnavailable { .. })
    }
}
