//! Dismissible alert banners at the top of the page container.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{timer_ms, Shared};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    /// Bootstrap contextual class suffix
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "check-circle",
            AlertKind::Info => "info-circle",
            AlertKind::Warning => "exclamation-triangle",
            AlertKind::Danger => "exclamation-circle",
        }
    }
}

/// Insert a banner at the top of `.container`; it removes itself after the
/// configured delay. No-op on pages without a container.
pub(super) fn show_alert(shared: &Shared, document: &Document, message: &str, kind: AlertKind) {
    if let Err(e) = try_show_alert(shared, document, message, kind) {
        log::warn!(target: "Legacy", "Could not show alert: {:?}", e);
    }
}

fn try_show_alert(shared: &Shared, document: &Document, message: &str, kind: AlertKind) -> Result<(), JsValue> {
    let Some(container) = document.query_selector(".container")? else {
        return Ok(());
    };

    let alert = document.create_element("div")?;
    alert.set_class_name(&format!("alert alert-{} alert-dismissible fade show", kind.as_str()));
    alert.set_attribute("role", "alert")?;

    let icon = document.create_element("i")?;
    icon.set_class_name(&format!("fas fa-{} me-2", kind.icon()));
    alert.append_child(&icon)?;
    // Text node, never markup
    alert.append_child(&document.create_text_node(message))?;

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("data-bs-dismiss", "alert")?;
    close.set_attribute("aria-label", "Close")?;
    alert.append_child(&close)?;

    container.insert_before(&alert, container.first_child().as_ref())?;

    let banner = alert.clone();
    shared.keep_timeout(Timeout::new(timer_ms(shared.config().alert_dismiss_ms), move || {
        if banner.is_connected() {
            banner.remove();
        }
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_icons() {
        assert_eq!(AlertKind::Success.icon(), "check-circle");
        assert_eq!(AlertKind::Danger.icon(), "exclamation-circle");
        assert_eq!(AlertKind::Warning.icon(), "exclamation-triangle");
        assert_eq!(AlertKind::Info.icon(), "info-circle");
    }

    #[test]
    fn test_alert_class_suffix() {
        assert_eq!(AlertKind::Warning.as_str(), "warning");
        assert_eq!(AlertKind::Danger.as_str(), "danger");
    }
}
