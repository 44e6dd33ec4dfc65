//! Page niceties: progress bar animation, the tracking clock, checkpoint
//! completion buttons and in-page anchor scrolling.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::{page_forms, query_all, query_one};
use super::Shared;
use crate::browser;

const PROGRESS_DELAY_MS: u32 = 200;
const CLOCK_TICK_MS: u32 = 1_000;
const COMPLETE_ACTION_MARKER: &str = "/complete";
const MARKING_COMPLETE_HTML: &str = "<i class=\"fas fa-spinner fa-spin me-1\"></i>Marking Complete...";

/// Grow each `.progress-bar` from zero back to its declared width
pub(super) fn animate_progress_bars(shared: &Rc<Shared>, document: &Document) {
    for bar in query_all::<HtmlElement>(document.query_selector_all(".progress-bar")) {
        let style = bar.style();
        let width = style.get_property_value("width").unwrap_or_default();
        let _ = style.set_property("width", "0%");
        shared.keep_timeout(Timeout::new(PROGRESS_DELAY_MS, move || {
            let style = bar.style();
            let _ = style.set_property("transition", "width 1s ease-in-out");
            let _ = style.set_property("width", &width);
        }));
    }
}

fn is_tracking_page(path: &str) -> bool {
    path.contains("/tracking/")
}

/// Live local time in every `.current-time` element on tracking pages
pub(super) fn start_tracking_clock(shared: &Rc<Shared>, document: &Document) {
    if !is_tracking_page(&browser::current_path()) {
        return;
    }
    let doc = document.clone();
    shared.keep_interval(Interval::new(CLOCK_TICK_MS, move || {
        let now = browser::local_time_string();
        for el in query_all::<Element>(doc.query_selector_all(".current-time")) {
            el.set_text_content(Some(&now));
        }
    }));
}

pub(super) fn enhance_checkpoint_forms(shared: &Rc<Shared>, document: &Document) {
    let forms = page_forms(document)
        .into_iter()
        .filter(|form| form.get_attribute("action").is_some_and(|a| a.contains(COMPLETE_ACTION_MARKER)));
    for form in forms {
        let target = form.clone();
        shared.listen(&form, "submit", move |ev| {
            if ev.default_prevented() {
                return;
            }
            if let Some(button) = query_one::<HtmlButtonElement>(&target, "button[type=\"submit\"]") {
                button.set_inner_html(MARKING_COMPLETE_HTML);
                button.set_disabled(true);
            }
        });
    }
}

/// Smooth scrolling for `href="#..."` links
pub(super) fn enable_smooth_scroll(shared: &Rc<Shared>, document: &Document) {
    for anchor in query_all::<HtmlAnchorElement>(document.query_selector_all("a[href^=\"#\"]")) {
        let doc = document.clone();
        let link = anchor.clone();
        shared.listen(&anchor, "click", move |ev| {
            let href = link.get_attribute("href").unwrap_or_default();
            // A bare "#" is not a valid selector
            if href.len() < 2 {
                return;
            }
            let Some(target) = doc.query_selector(&href).ok().flatten() else { return };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_page_detection() {
        assert!(is_tracking_page("/tracking/42"));
        assert!(!is_tracking_page("/itinerary/42"));
        assert!(!is_tracking_page("/"));
    }
}
