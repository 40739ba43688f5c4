//! Application Layer
//!
//! - **bootstrap**: service worker registration and DOM listener wiring
//! - **pwa_shell**: Dioxus component that renders the controls and starts the bootstrap

pub mod bootstrap;
pub mod pwa_shell;

pub use bootstrap::{start, stop, wire_document, ListenerRegistry, WiringPlan};
pub use pwa_shell::PwaShell;
