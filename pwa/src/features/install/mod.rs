//! Install Prompt Capture and Replay
//!
//! The browser fires `beforeinstallprompt` when the page qualifies for "add to
//! home screen". The event is held back (default UI suppressed) and replayed
//! when the user clicks the install button. A captured event is prompted at
//! most once; further clicks do nothing until the browser fires a new one.

mod state;

pub use state::{InstallPrompt, InstallPromptState};

use crate::services::errors::PwaResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The deferred `beforeinstallprompt` event.
#[async_trait(?Send)]
pub trait InstallPromptEvent {
    /// `event.preventDefault()`, keeps the browser's own install UI hidden
    fn suppress_default(&self);

    /// `event.prompt()`, shows the install dialog. Browsers reject a second call.
    fn show_prompt(&self) -> PwaResult<()>;

    /// Wait for `event.userChoice`.
    async fn resolve_choice(&self) -> PwaResult<UserChoice>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl InstallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallOutcome::Accepted => "accepted",
            InstallOutcome::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved value of `userChoice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChoice {
    pub outcome: InstallOutcome,
    #[serde(default)]
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_choice_decodes_browser_shape() {
        let choice: UserChoice =
            serde_json::from_str(r#"{"outcome": "accepted", "platform": "web"}"#).unwrap();
        assert_eq!(choice.outcome, InstallOutcome::Accepted);
        assert_eq!(choice.platform, "web");

        let choice: UserChoice = serde_json::from_str(r#"{"outcome": "dismissed"}"#).unwrap();
        assert_eq!(choice.outcome, InstallOutcome::Dismissed);
        assert!(choice.platform.is_empty());
    }

    #[test]
    fn test_unknown_outcome_is_rejected() {
        assert!(serde_json::from_str::<UserChoice>(r#"{"outcome": "maybe"}"#).is_err());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(InstallOutcome::Accepted.to_string(), "accepted");
        assert_eq!(InstallOutcome::Dismissed.to_string(), "dismissed");
    }
}
