//! `web-sys` implementations of the host traits, plus a binding for
//! `BeforeInstallPromptEvent` (non-standard, so `web-sys` doesn't ship it).

use crate::features::install::{InstallPromptEvent, UserChoice};
use crate::features::refresh::{PageHost, VisibilityState};
use crate::services::errors::{PwaError, PwaResult};
use crate::services::service_worker::ServiceWorkerHost;
use async_trait::async_trait;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, RegistrationOptions, ServiceWorkerRegistration, Window};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = web_sys::Event, typescript_type = "BeforeInstallPromptEvent")]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method, catch, js_name = prompt)]
    fn prompt_js(this: &BeforeInstallPromptEvent) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_name = userChoice)]
    fn user_choice_js(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

#[async_trait(?Send)]
impl InstallPromptEvent for BeforeInstallPromptEvent {
    fn suppress_default(&self) {
        self.prevent_default();
    }

    fn show_prompt(&self) -> PwaResult<()> {
        // Newer browsers return a promise mirroring userChoice; it is not needed here
        self.prompt_js()
            .map(|_| ())
            .map_err(|e| PwaError::install_prompt(js_reason(&e)))
    }

    async fn resolve_choice(&self) -> PwaResult<UserChoice> {
        let value = JsFuture::from(self.user_choice_js())
            .await
            .map_err(|e| PwaError::install_prompt(js_reason(&e)))?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| PwaError::install_prompt(format!("unexpected userChoice: {}", e)))
    }
}

/// Readable text for a thrown JS value.
pub fn js_reason(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    format!("{:?}", value)
}

/// The live `window`/`document` pair.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> PwaResult<Self> {
        let window = web_sys::window().ok_or_else(|| PwaError::api_unavailable("window"))?;
        let document = window
            .document()
            .ok_or_else(|| PwaError::api_unavailable("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    /// `document.readyState === "loading"`
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl PageHost for BrowserHost {
    fn visibility_state(&self) -> VisibilityState {
        match self.document.visibility_state() {
            web_sys::VisibilityState::Visible => VisibilityState::Visible,
            _ => VisibilityState::Hidden,
        }
    }

    fn reload(&self) -> PwaResult<()> {
        self.window
            .location()
            .reload()
            .map_err(|e| PwaError::Reload {
                reason: js_reason(&e),
            })
    }
}

#[async_trait(?Send)]
impl ServiceWorkerHost for BrowserHost {
    fn supports_service_worker(&self) -> bool {
        Reflect::has(&self.window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
    }

    async fn register_service_worker(
        &self,
        script_url: &str,
        scope: Option<&str>,
    ) -> PwaResult<String> {
        let to_error = |e: JsValue| PwaError::Registration {
            script_url: script_url.to_string(),
            reason: js_reason(&e),
        };

        let container = self.window.navigator().service_worker();
        let promise = match scope {
            Some(scope) => {
                let options = RegistrationOptions::new();
                options.set_scope(scope);
                container.register_with_options(script_url, &options)
            }
            None => container.register(script_url),
        };

        let registration = JsFuture::from(promise).await.map_err(to_error)?;
        let registration: ServiceWorkerRegistration =
            registration.dyn_into().map_err(to_error)?;
        Ok(registration.scope())
    }
}
