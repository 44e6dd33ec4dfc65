//! Native weather notifications for saved trips.
//!
//! Once the user grants permission the page polls the backend for alerts and
//! raises a notification for every high-severity one. Tasks run on the plain
//! `wasm-bindgen-futures` executor, so pages without a mounted component work too.

use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlButtonElement, Notification, NotificationOptions, NotificationPermission};

use super::alerts::{show_alert, AlertKind};
use super::{timer_ms, Shared};
use crate::api;
use crate::browser;
use crate::config::AppConfig;
use crate::models::WeatherAlert;

const BUTTON_ID: &str = "enableNotifications";
const ENABLED_HTML: &str = "<i class=\"fas fa-check me-1\"></i>Notifications Enabled";
const GRANTED_MESSAGE: &str = "Weather alerts enabled for your trips";
const NOTIFICATION_ICON: &str = "/static/images/weather-icon.png";
const NOTIFICATION_BADGE: &str = "/static/images/app-icon.png";

fn notification_title(alert: &WeatherAlert) -> String {
    format!("Weather Alert: {}", alert.destination)
}

fn notification_body(alert: &WeatherAlert) -> String {
    format!("{}. Temperature: {}°C", alert.weather.description, alert.weather.temp)
}

/// The browser exposes the Notification API
fn supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &"Notification".into()).unwrap_or(false))
        .unwrap_or(false)
}

fn permission() -> Option<NotificationPermission> {
    supported().then(Notification::permission)
}

pub(super) fn initialize(shared: &Rc<Shared>, document: &Document) {
    let button = document
        .get_element_by_id(BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    if let Some(button) = &button {
        let weak = Rc::downgrade(shared);
        let doc = document.clone();
        shared.listen(button, "click", move |_| {
            let (weak, doc) = (weak.clone(), doc.clone());
            spawn_local(async move { request_permission(weak, doc).await });
        });
    }

    if permission() == Some(NotificationPermission::Granted) {
        if let Some(button) = &button {
            mark_enabled(button);
        }
        start_polling(shared);
    }
}

async fn request_permission(shared: Weak<Shared>, document: Document) {
    if permission() != Some(NotificationPermission::Default) {
        return;
    }
    let promise = match Notification::request_permission() {
        Ok(promise) => promise,
        Err(e) => {
            log::warn!(target: "Notifications", "Permission request failed: {:?}", e);
            return;
        }
    };
    let granted = match JsFuture::from(promise).await {
        Ok(answer) => answer.as_string().as_deref() == Some("granted"),
        Err(e) => {
            log::warn!(target: "Notifications", "Permission request rejected: {:?}", e);
            false
        }
    };
    if !granted {
        log::info!(target: "Notifications", "Notification permission not granted");
        return;
    }

    let Some(shared) = shared.upgrade() else { return };
    show_alert(&shared, &document, GRANTED_MESSAGE, AlertKind::Success);
    if let Some(button) = document
        .get_element_by_id(BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        mark_enabled(&button);
    }
    start_polling(&shared);
}

fn mark_enabled(button: &HtmlButtonElement) {
    button.set_inner_html(ENABLED_HTML);
    let classes = button.class_list();
    let _ = classes.remove_1("btn-outline-secondary");
    let _ = classes.add_1("btn-success");
    button.set_disabled(true);
}

/// Check now, then on the configured interval. Starts at most once.
fn start_polling(shared: &Shared) {
    if shared.polling.replace(true) {
        return;
    }
    let config = shared.config().clone();
    check_weather_alerts(config.clone());
    let interval = timer_ms(config.weather_alert_interval_ms);
    shared.keep_interval(Interval::new(interval, move || check_weather_alerts(config.clone())));
    log::info!(target: "Notifications", "Weather alert polling every {} ms", interval);
}

fn check_weather_alerts(config: AppConfig) {
    spawn_local(async move {
        match api::fetch_weather_alerts(&config).await {
            Ok(alerts) => {
                for alert in alerts.iter().filter(|a| a.is_high_severity()) {
                    show_weather_notification(alert);
                }
            }
            Err(e) => log::info!(target: "Notifications", "Weather service unavailable: {}", e),
        }
    });
}

fn show_weather_notification(alert: &WeatherAlert) {
    if permission() != Some(NotificationPermission::Granted) {
        return;
    }
    let options = NotificationOptions::new();
    options.set_body(&notification_body(alert));
    options.set_icon(NOTIFICATION_ICON);
    options.set_badge(NOTIFICATION_BADGE);

    let notification = match Notification::new_with_options(&notification_title(alert), &options) {
        Ok(n) => n,
        Err(e) => {
            log::warn!(target: "Notifications", "Could not show notification: {:?}", e);
            return;
        }
    };
    let target = notification.clone();
    // Freed by the browser after it runs once
    let on_click = Closure::once_into_js(move || {
        if let Ok(window) = browser::window() {
            let _ = window.focus();
        }
        target.close();
    });
    notification.set_onclick(Some(on_click.unchecked_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertWeather;

    fn sample() -> WeatherAlert {
        WeatherAlert {
            destination: "Goa".to_string(),
            travel_date: None,
            severity: "high".to_string(),
            weather: AlertWeather {
                description: "Heavy rain".to_string(),
                temp: 27.5,
            },
        }
    }

    #[test]
    fn test_notification_text() {
        let alert = sample();
        assert_eq!(notification_title(&alert), "Weather Alert: Goa");
        assert_eq!(notification_body(&alert), "Heavy rain. Temperature: 27.5°C");
    }
}
