use super::{InstallOutcome, InstallPromptEvent};
use crate::services::errors::PwaResult;
use crate::{console_debug, console_log, console_warn};
use std::cell::RefCell;

#[derive(Debug)]
pub enum InstallPromptState<E> {
    /// No eligibility event has been captured, or the last one was used
    Idle,
    /// An event is stored and the next click may prompt it
    PromptAvailable(E),
    /// `prompt()` was called and `userChoice` is pending
    Resolving,
}

impl<E> InstallPromptState<E> {
    pub fn name(&self) -> &'static str {
        match self {
            InstallPromptState::Idle => "idle",
            InstallPromptState::PromptAvailable(_) => "prompt-available",
            InstallPromptState::Resolving => "resolving",
        }
    }
}

/// Page-lifetime holder for the deferred install prompt.
///
/// Both the eligibility listener and the click handler run on the main thread,
/// so a `RefCell` is enough. No borrow is held across an `.await`.
#[derive(Debug)]
pub struct InstallPrompt<E> {
    state: RefCell<InstallPromptState<E>>,
}

impl<E> Default for InstallPrompt<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InstallPrompt<E> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(InstallPromptState::Idle),
        }
    }

    pub fn state_name(&self) -> &'static str {
        self.state.borrow().name()
    }

    pub fn is_available(&self) -> bool {
        matches!(*self.state.borrow(), InstallPromptState::PromptAvailable(_))
    }

    /// Take the stored event for prompting, moving to `Resolving`.
    fn take_for_prompt(&self) -> Option<E> {
        let mut state = self.state.borrow_mut();
        match std::mem::replace(&mut *state, InstallPromptState::Resolving) {
            InstallPromptState::PromptAvailable(event) => Some(event),
            previous => {
                *state = previous;
                None
            }
        }
    }

    /// Back to `Idle`, unless a newer event was captured while resolving.
    fn finish(&self) {
        let mut state = self.state.borrow_mut();
        if matches!(*state, InstallPromptState::Resolving) {
            *state = InstallPromptState::Idle;
        }
    }
}

impl<E: InstallPromptEvent> InstallPrompt<E> {
    /// Handle `beforeinstallprompt`: suppress the browser UI and keep the event.
    pub fn capture(&self, event: E) {
        event.suppress_default();
        let previous = self.state.replace(InstallPromptState::PromptAvailable(event));
        console_debug!(
            "Install prompt captured (previous state: {})",
            previous.name()
        );
    }

    /// Handle an install button click.
    ///
    /// Returns `Ok(None)` when there was nothing to prompt.
    pub async fn handle_click(&self) -> PwaResult<Option<InstallOutcome>> {
        let Some(event) = self.take_for_prompt() else {
            console_debug!("Install clicked with no pending prompt ({})", self.state_name());
            return Ok(None);
        };

        if let Err(e) = event.show_prompt() {
            console_warn!("Install prompt could not be shown: {}", e);
            self.finish();
            return Err(e);
        }

        let choice = event.resolve_choice().await;
        self.finish();

        let choice = choice?;
        console_log!("User choice: {}", choice.outcome);
        Ok(Some(choice.outcome))
    }
}
