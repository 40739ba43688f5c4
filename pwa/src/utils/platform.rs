//! Platform Detection Utilities
//!
//! Decides whether the page is an installed (standalone) session on an iOS
//! device. iOS home screen apps don't refresh stale views on their own, so the
//! bootstrap reloads them when they become visible again.

use crate::console_debug;
use web_sys::window;

/// Device markers matched case-insensitively against the user agent
const IOS_DEVICE_MARKERS: [&str; 3] = ["iphone", "ipad", "ipod"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformFlags {
    /// Display mode reports standalone (installed to the home screen)
    pub is_standalone: bool,
    /// User agent names an iPhone, iPad or iPod
    pub is_ios: bool,
}

impl PlatformFlags {
    pub fn new(is_standalone: bool, user_agent: &str) -> Self {
        Self {
            is_standalone,
            is_ios: is_ios_user_agent(user_agent),
        }
    }

    /// Visibility/focus reloads are only wanted for installed iOS sessions.
    pub fn wants_visibility_refresh(&self) -> bool {
        self.is_standalone && self.is_ios
    }
}

pub fn is_ios_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    IOS_DEVICE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Check if running as a PWA/Home Screen App
pub fn is_home_screen_app(media_query: &str) -> bool {
    let is_pwa = window()
        .and_then(|w| w.match_media(media_query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false);

    console_debug!("PWA detection ({}): {}", media_query, is_pwa);
    is_pwa
}

/// Read both flags from the live window.
pub fn detect_platform(media_query: &str) -> PlatformFlags {
    let user_agent = window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();

    console_debug!("User agent: {}", user_agent);

    PlatformFlags::new(is_home_screen_app(media_query), &user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const DESKTOP_SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";

    #[test]
    fn test_ios_user_agents() {
        assert!(is_ios_user_agent(IPHONE_UA));
        assert!(is_ios_user_agent(IPAD_UA));
        assert!(is_ios_user_agent("something IPOD touch"));
        assert!(!is_ios_user_agent(ANDROID_UA));
        assert!(!is_ios_user_agent(DESKTOP_SAFARI_UA));
        assert!(!is_ios_user_agent(""));
    }

    #[test]
    fn test_visibility_refresh_needs_both_flags() {
        assert!(PlatformFlags::new(true, IPHONE_UA).wants_visibility_refresh());
        assert!(!PlatformFlags::new(false, IPHONE_UA).wants_visibility_refresh());
        assert!(!PlatformFlags::new(true, ANDROID_UA).wants_visibility_refresh());
        assert!(!PlatformFlags::new(false, ANDROID_UA).wants_visibility_refresh());
    }
}
