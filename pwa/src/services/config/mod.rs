//! Bootstrap Configuration
//!
//! Element ids, the worker script location and the media query used for
//! standalone detection. Every field has a default, so a partial JSON document
//! only overrides what it names.

use crate::services::errors::{PwaError, PwaResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_WORKER_URL: &str = "/static/public/sw.js";
pub const DEFAULT_REFRESH_BUTTON_ID: &str = "refresh-button";
pub const DEFAULT_INSTALL_BUTTON_ID: &str = "install-button";
pub const DEFAULT_STANDALONE_MEDIA_QUERY: &str = "(display-mode: standalone)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Worker script passed to `navigator.serviceWorker.register`
    pub service_worker_url: String,

    /// Optional registration scope; the browser default applies when unset
    pub service_worker_scope: Option<String>,

    /// Element id of the manual refresh button
    pub refresh_button_id: String,

    /// Element id of the install button
    pub install_button_id: String,

    /// Media query reporting an installed (standalone) session
    pub standalone_media_query: String,

    /// Log successful registrations as well as failures
    pub log_registration_success: bool,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            service_worker_url: DEFAULT_SERVICE_WORKER_URL.to_string(),
            service_worker_scope: None,
            refresh_button_id: DEFAULT_REFRESH_BUTTON_ID.to_string(),
            install_button_id: DEFAULT_INSTALL_BUTTON_ID.to_string(),
            standalone_media_query: DEFAULT_STANDALONE_MEDIA_QUERY.to_string(),
            log_registration_success: false,
        }
    }
}

impl PwaConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> PwaResult<Self> {
        let config: PwaConfig =
            serde_json::from_str(json).map_err(|e| PwaError::Configuration {
                field: "json".to_string(),
                value: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PwaResult<()> {
        let url = self.service_worker_url.trim();
        let is_path = url.starts_with('/');
        let is_http = url.starts_with("https://") || url.starts_with("http://");
        if url.is_empty() || !(is_path || is_http) {
            return Err(invalid("service_worker_url", &self.service_worker_url));
        }

        if let Some(scope) = &self.service_worker_scope {
            if scope.trim().is_empty() {
                return Err(invalid("service_worker_scope", scope));
            }
        }

        for (field, value) in [
            ("refresh_button_id", &self.refresh_button_id),
            ("install_button_id", &self.install_button_id),
            ("standalone_media_query", &self.standalone_media_query),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(field, value));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> PwaError {
    PwaError::Configuration {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PwaConfig::default();
        assert_eq!(config.service_worker_url, "/static/public/sw.js");
        assert_eq!(config.refresh_button_id, "refresh-button");
        assert_eq!(config.install_button_id, "install-button");
        assert_eq!(config.standalone_media_query, "(display-mode: standalone)");
        assert!(config.service_worker_scope.is_none());
        assert!(!config.log_registration_success);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PwaConfig::from_json(r#"{"install_button_id": "add-to-home", "log_registration_success": true}"#)
                .unwrap();
        assert_eq!(config.install_button_id, "add-to-home");
        assert!(config.log_registration_success);
        assert_eq!(config.service_worker_url, DEFAULT_SERVICE_WORKER_URL);
    }

    #[test]
    fn test_invalid_json() {
        let err = PwaConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PwaError::Configuration { ref field, .. } if field == "json"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = PwaConfig {
            service_worker_url: "sw.js".to_string(),
            ..PwaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PwaConfig {
            refresh_button_id: "  ".to_string(),
            ..PwaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PwaError::Configuration {
                field: "refresh_button_id".to_string(),
                value: "  ".to_string(),
            })
        );

        let config = PwaConfig {
            service_worker_scope: Some(String::new()),
            ..PwaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_absolute_worker_url_is_accepted() {
        let config = PwaConfig {
            service_worker_url: "https://example.com/sw.js".to_string(),
            service_worker_scope: Some("/".to_string()),
            ..PwaConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
