pub mod install;
pub mod refresh;

pub use install::{InstallOutcome, InstallPrompt, InstallPromptEvent, InstallPromptState, UserChoice};
pub use refresh::{refresh_if_visible, PageHost, RefreshDecision, VisibilityState};
