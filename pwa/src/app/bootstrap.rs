//! Bootstrap orchestration: registers the service worker and wires the DOM
//! listeners once the document has been parsed.

use crate::features::install::InstallPrompt;
use crate::features::refresh::refresh_if_visible;
use crate::services::browser::{BeforeInstallPromptEvent, BrowserHost};
use crate::services::config::PwaConfig;
use crate::services::errors::{PwaError, PwaResult};
use crate::services::service_worker::register_service_worker;
use crate::utils::platform::{detect_platform, PlatformFlags};
use crate::{console_debug, console_error, console_info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Which listeners the DOM wiring installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WiringPlan {
    /// `visibilitychange` on the document and `focus` on the window
    pub visibility_refresh: bool,
    /// Click handler on the refresh button
    pub refresh_button: bool,
    /// `beforeinstallprompt` capture plus the install button click handler
    pub install_prompt: bool,
}

impl WiringPlan {
    pub fn new(flags: PlatformFlags, has_refresh_button: bool, has_install_button: bool) -> Self {
        Self {
            visibility_refresh: flags.wants_visibility_refresh(),
            refresh_button: has_refresh_button,
            // Without a button there is nothing to replay the prompt from, so the
            // browser keeps its own install UI.
            install_prompt: has_install_button,
        }
    }
}

type Listener = Closure<dyn FnMut(Event)>;

struct RegisteredListener {
    target: EventTarget,
    event: &'static str,
    callback: Listener,
}

/// Listeners installed for this page. Dropping it detaches them.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<RegisteredListener>,
}

impl ListenerRegistry {
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> PwaResult<()>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| PwaError::Listener {
                event: event.to_string(),
                reason: crate::services::browser::js_reason(&e),
            })?;
        self.listeners.push(RegisteredListener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(|l| l.event).collect()
    }
}

impl Drop for ListenerRegistry {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

thread_local! {
    static ACTIVE_BOOTSTRAP: RefCell<Option<ListenerRegistry>> = const { RefCell::new(None) };
}

/// Start the bootstrap for this page. Calling it again is a no-op.
pub fn start(config: PwaConfig) -> PwaResult<()> {
    let already_started = ACTIVE_BOOTSTRAP.with(|slot| slot.borrow().is_some());
    if already_started {
        console_debug!("PWA bootstrap already started");
        return Ok(());
    }

    config.validate()?;
    let host = BrowserHost::new()?;
    let config = Rc::new(config);

    {
        let host = host.clone();
        let config = Rc::clone(&config);
        wasm_bindgen_futures::spawn_local(async move {
            register_service_worker(&host, &config).await;
        });
    }

    let mut registry = ListenerRegistry::default();
    if host.is_loading() {
        let target: EventTarget = host.document().clone().into();
        let ready_host = host.clone();
        registry.listen(&target, "DOMContentLoaded", move |_event| {
            if let Err(e) = wire_into_active(&ready_host, &config) {
                console_error!("PWA DOM wiring failed: {}", e);
            }
        })?;
        ACTIVE_BOOTSTRAP.with(|slot| *slot.borrow_mut() = Some(registry));
    } else {
        wire_document(&host, &config, &mut registry)?;
        ACTIVE_BOOTSTRAP.with(|slot| *slot.borrow_mut() = Some(registry));
    }

    Ok(())
}

/// Detach every listener installed by `start`.
pub fn stop() {
    let registry = ACTIVE_BOOTSTRAP.with(|slot| slot.borrow_mut().take());
    if let Some(registry) = registry {
        console_debug!("Detaching {} PWA listeners", registry.len());
    }
}

fn wire_into_active(host: &BrowserHost, config: &PwaConfig) -> PwaResult<()> {
    let mut registry = ListenerRegistry::default();
    wire_document(host, config, &mut registry)?;
    ACTIVE_BOOTSTRAP.with(|slot| {
        if let Some(active) = slot.borrow_mut().as_mut() {
            active.listeners.append(&mut registry.listeners);
        }
    });
    Ok(())
}

/// Install the DOM listeners for the current document.
pub fn wire_document(
    host: &BrowserHost,
    config: &PwaConfig,
    registry: &mut ListenerRegistry,
) -> PwaResult<WiringPlan> {
    let flags = detect_platform(&config.standalone_media_query);
    let document = host.document();
    let refresh_button = document.get_element_by_id(&config.refresh_button_id);
    let install_button = document.get_element_by_id(&config.install_button_id);
    let plan = WiringPlan::new(flags, refresh_button.is_some(), install_button.is_some());

    console_debug!("PWA wiring plan: {:?} (flags: {:?})", plan, flags);

    if plan.visibility_refresh {
        let document_target: EventTarget = document.clone().into();
        let window_target: EventTarget = host.window().clone().into();
        registry.listen(&document_target, "visibilitychange", refresh_handler(host))?;
        registry.listen(&window_target, "focus", refresh_handler(host))?;
    }

    if let Some(button) = refresh_button {
        let target: EventTarget = button.into();
        registry.listen(&target, "click", refresh_handler(host))?;
    }

    if let Some(button) = install_button {
        let prompt: Rc<InstallPrompt<BeforeInstallPromptEvent>> = Rc::new(InstallPrompt::new());

        let capture = Rc::clone(&prompt);
        let window_target: EventTarget = host.window().clone().into();
        registry.listen(&window_target, "beforeinstallprompt", move |event: Event| {
            capture.capture(event.unchecked_into::<BeforeInstallPromptEvent>());
        })?;

        let target: EventTarget = button.into();
        registry.listen(&target, "click", move |_event| {
            let prompt = Rc::clone(&prompt);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = prompt.handle_click().await {
                    console_error!("Install prompt failed: {}", e);
                }
            });
        })?;
    }

    console_info!("PWA bootstrap wired {} listeners", registry.len());
    Ok(plan)
}

fn refresh_handler(host: &BrowserHost) -> impl FnMut(Event) + 'static {
    let host = host.clone();
    move |_event| {
        if let Err(e) = refresh_if_visible(&host) {
            console_error!("Refresh failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(is_standalone: bool, is_ios: bool) -> PlatformFlags {
        PlatformFlags {
            is_standalone,
            is_ios,
        }
    }

    #[test]
    fn test_visibility_listeners_only_for_standalone_ios() {
        assert!(WiringPlan::new(flags(true, true), false, false).visibility_refresh);

        for (standalone, ios) in [(true, false), (false, true), (false, false)] {
            let plan = WiringPlan::new(flags(standalone, ios), true, true);
            assert!(
                !plan.visibility_refresh,
                "standalone={} ios={} should not listen for visibility",
                standalone, ios
            );
        }
    }

    #[test]
    fn test_refresh_button_ignores_platform() {
        for (standalone, ios) in [(true, true), (true, false), (false, true), (false, false)] {
            assert!(WiringPlan::new(flags(standalone, ios), true, false).refresh_button);
        }
    }

    #[test]
    fn test_absent_elements_plan_nothing() {
        let plan = WiringPlan::new(flags(false, false), false, false);
        assert_eq!(
            plan,
            WiringPlan {
                visibility_refresh: false,
                refresh_button: false,
                install_prompt: false,
            }
        );
    }

    #[test]
    fn test_install_prompt_follows_button() {
        assert!(WiringPlan::new(flags(false, false), false, true).install_prompt);
        assert!(!WiringPlan::new(flags(true, true), true, false).install_prompt);
    }
}
