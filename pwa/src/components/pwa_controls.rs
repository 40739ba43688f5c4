use crate::services::config::{DEFAULT_INSTALL_BUTTON_ID, DEFAULT_REFRESH_BUTTON_ID};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PwaControlsProps {
    #[props(default = DEFAULT_REFRESH_BUTTON_ID.to_string())]
    pub refresh_button_id: String,
    #[props(default = DEFAULT_INSTALL_BUTTON_ID.to_string())]
    pub install_button_id: String,
}

/// The two optional buttons the bootstrap looks up by id. Their behavior is
/// attached by the bootstrap, not by Dioxus handlers.
#[component]
pub fn PwaControls(props: PwaControlsProps) -> Element {
    rsx! {
        div {
            class: "pwa-controls",
            button {
                id: "{props.refresh_button_id}",
                r#type: "button",
                class: "pwa-refresh",
                "🔄 Refresh"
            }
            button {
                id: "{props.install_button_id}",
                r#type: "button",
                class: "pwa-install",
                "📲 Install app"
            }
        }
    }
}
