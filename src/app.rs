//! Travel AI App
//!
//! Mounts the Leptos components into their server-rendered containers and
//! attaches the legacy page layer. One [`TravelApp`] exists per page; it is
//! disposed on `pagehide` and rebuilt if the page comes back from the
//! back/forward cache.

use std::any::Any;
use std::cell::RefCell;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, PageTransitionEvent};

use crate::browser;
use crate::components::{ItineraryForm, ItineraryTracker, WeatherWidget};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::legacy::LegacyLayer;

pub const FORM_MOUNT_ID: &str = "react-itinerary-form";
pub const TRACKER_MOUNT_ID: &str = "react-tracker";
pub const WEATHER_MOUNT_ID: &str = "react-weather";

pub const MOUNT_IDS: [&str; 3] = [FORM_MOUNT_ID, TRACKER_MOUNT_ID, WEATHER_MOUNT_ID];

/// Selector matching any component container; the legacy layer leaves
/// everything inside them alone
pub fn mount_root_selector() -> String {
    MOUNT_IDS.iter().map(|id| format!("#{}", id)).collect::<Vec<_>>().join(", ")
}

thread_local! {
    static APP: RefCell<Option<TravelApp>> = const { RefCell::new(None) };
}

fn mount_point(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Everything mounted on the current page
pub struct TravelApp {
    /// Leptos unmount handles; dropping one removes its view
    mounts: Vec<Box<dyn Any>>,
    legacy: Option<LegacyLayer>,
}

impl TravelApp {
    pub fn init(config: AppConfig) -> Self {
        let mut mounts: Vec<Box<dyn Any>> = Vec::new();

        if let Some(document) = browser::document() {
            let ctx = AppContext::new(config.clone());

            if let Some(el) = mount_point(&document, FORM_MOUNT_ID) {
                let ctx = ctx.clone();
                mounts.push(Box::new(mount_to(el, move || {
                    provide_context(ctx);
                    view! { <ItineraryForm /> }
                })));
                log::info!(target: "App", "Mounted itinerary form");
            }

            if let Some(el) = mount_point(&document, TRACKER_MOUNT_ID) {
                match el.dataset().get("itineraryId").filter(|id| !id.is_empty()) {
                    Some(itinerary_id) => {
                        let ctx = ctx.clone();
                        mounts.push(Box::new(mount_to(el, move || {
                            provide_context(ctx);
                            view! { <ItineraryTracker itinerary_id=itinerary_id /> }
                        })));
                        log::info!(target: "App", "Mounted itinerary tracker");
                    }
                    None => log::warn!(target: "App", "#{} has no data-itinerary-id; tracker skipped", TRACKER_MOUNT_ID),
                }
            }

            if let Some(el) = mount_point(&document, WEATHER_MOUNT_ID) {
                let destination = el.dataset().get("destination").unwrap_or_default();
                let ctx = ctx.clone();
                mounts.push(Box::new(mount_to(el, move || {
                    provide_context(ctx);
                    view! { <WeatherWidget destination=Signal::stored(destination) /> }
                })));
                log::info!(target: "App", "Mounted weather widget");
            }
        }

        let legacy = LegacyLayer::init(config);
        Self { mounts, legacy }
    }

    pub fn mounted_count(&self) -> usize {
        self.mounts.len()
    }

    /// Unmount every component and detach the legacy layer
    pub fn dispose(self) {
        let count = self.mounts.len();
        drop(self.mounts);
        if let Some(legacy) = self.legacy {
            legacy.dispose();
        }
        log::info!(target: "App", "Disposed {} mounted components", count);
    }
}

fn install(config: AppConfig) {
    let app = TravelApp::init(config);
    log::info!(target: "App", "Travel AI ready with {} components", app.mounted_count());
    let previous = APP.with(|slot| slot.borrow_mut().replace(app));
    if let Some(previous) = previous {
        previous.dispose();
    }
}

fn teardown() {
    // Take it out first so disposal runs without the slot borrowed
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.dispose();
    }
}

/// Build the app and tie it to the page lifecycle
pub fn start(config: AppConfig) {
    install(config);

    let Ok(window) = browser::window() else { return };

    let on_hide = Closure::<dyn FnMut(Event)>::new(move |_: Event| teardown());
    let on_show = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let restored = ev
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        let missing = APP.with(|slot| slot.borrow().is_none());
        if restored && missing {
            if let Some(document) = browser::document() {
                install(AppConfig::from_document(&document));
            }
        }
    });
    if window
        .add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())
        .is_err()
        || window
            .add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())
            .is_err()
    {
        log::warn!(target: "App", "Could not watch page lifecycle");
    }
    // Page-lifetime listeners
    on_hide.forget();
    on_show.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_root_selector_covers_every_container() {
        assert_eq!(mount_root_selector(), "#react-itinerary-form, #react-tracker, #react-weather");
    }
}
