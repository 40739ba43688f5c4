use crate::components::PwaControls;
use crate::services::config::PwaConfig;
use crate::{console_error, start};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PwaShellProps {
    #[props(default)]
    pub config: PwaConfig,
}

/// Renders the refresh/install controls and starts the bootstrap once they are
/// in the DOM.
#[component]
pub fn PwaShell(props: PwaShellProps) -> Element {
    let config = props.config.clone();
    use_effect(move || {
        if let Err(e) = start(config.clone()) {
            console_error!("PWA bootstrap failed to start: {}", e);
        }
    });

    rsx! {
        PwaControls {
            refresh_button_id: props.config.refresh_button_id.clone(),
            install_button_id: props.config.install_button_id.clone(),
        }
    }
}
