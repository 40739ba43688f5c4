//! Visibility-gated page reloads, shared by the iOS standalone listeners and the
//! manual refresh button.

use crate::services::errors::PwaResult;
use crate::console_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Visible,
    Hidden,
}

impl VisibilityState {
    /// Anything other than `"visible"` (`"hidden"`, legacy `"prerender"`) counts as hidden.
    pub fn from_dom(value: &str) -> Self {
        if value == "visible" {
            VisibilityState::Visible
        } else {
            VisibilityState::Hidden
        }
    }
}

/// The document/location pair a refresh needs.
pub trait PageHost {
    fn visibility_state(&self) -> VisibilityState;
    fn reload(&self) -> PwaResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    Reloaded,
    SkippedHidden,
}

pub fn refresh_if_visible<H: PageHost + ?Sized>(host: &H) -> PwaResult<RefreshDecision> {
    match host.visibility_state() {
        VisibilityState::Visible => {
            host.reload()?;
            Ok(RefreshDecision::Reloaded)
        }
        VisibilityState::Hidden => {
            console_debug!("Document hidden, skipping reload");
            Ok(RefreshDecision::SkippedHidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::PwaError;
    use std::cell::Cell;

    struct MockPage {
        visibility: Cell<VisibilityState>,
        reloads: Cell<u32>,
        fail: bool,
    }

    impl MockPage {
        fn new(visibility: VisibilityState) -> Self {
            Self {
                visibility: Cell::new(visibility),
                reloads: Cell::new(0),
                fail: false,
            }
        }
    }

    impl PageHost for MockPage {
        fn visibility_state(&self) -> VisibilityState {
            self.visibility.get()
        }

        fn reload(&self) -> PwaResult<()> {
            if self.fail {
                return Err(PwaError::Reload {
                    reason: "blocked".to_string(),
                });
            }
            self.reloads.set(self.reloads.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_visible_page_reloads_once() {
        let page = MockPage::new(VisibilityState::Visible);
        assert_eq!(refresh_if_visible(&page), Ok(RefreshDecision::Reloaded));
        assert_eq!(page.reloads.get(), 1);
    }

    #[test]
    fn test_hidden_page_does_not_reload() {
        let page = MockPage::new(VisibilityState::Hidden);
        assert_eq!(refresh_if_visible(&page), Ok(RefreshDecision::SkippedHidden));
        assert_eq!(page.reloads.get(), 0);

        page.visibility.set(VisibilityState::Visible);
        assert_eq!(refresh_if_visible(&page), Ok(RefreshDecision::Reloaded));
        assert_eq!(page.reloads.get(), 1);
    }

    #[test]
    fn test_reload_failure_propagates() {
        let mut page = MockPage::new(VisibilityState::Visible);
        page.fail = true;
        assert!(matches!(refresh_if_visible(&page), Err(PwaError::Reload { .. })));
    }

    #[test]
    fn test_visibility_from_dom() {
        assert_eq!(VisibilityState::from_dom("visible"), VisibilityState::Visible);
        assert_eq!(VisibilityState::from_dom("hidden"), VisibilityState::Hidden);
        assert_eq!(VisibilityState::from_dom("prerender"), VisibilityState::Hidden);
    }
}
