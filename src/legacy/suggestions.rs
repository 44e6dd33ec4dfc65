//! Destination suggestions dropdown for the server-rendered `#destination` input.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use trip_forms::suggest::{suggest, SuggestionRule, LEGACY_DESTINATIONS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node};

use super::{timer_ms, Shared};

const LIST_ID: &str = "destination-suggestions";
const STYLE_ID: &str = "travel-ai-legacy-styles";

const SUGGESTION_STYLES: &str = "
.suggestions-dropdown {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: white;
    border: 1px solid #dee2e6;
    border-top: none;
    border-radius: 0 0 0.375rem 0.375rem;
    box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.15);
    z-index: 1000;
    max-height: 200px;
    overflow-y: auto;
}
.suggestion-item {
    padding: 0.75rem 1rem;
    cursor: pointer;
    border-bottom: 1px solid #f8f9fa;
}
.suggestion-item:hover {
    background-color: #f8f9fa;
}
";

/// Add the dropdown styles once per page
pub(super) fn inject_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(SUGGESTION_STYLES));
        let _ = head.append_child(&style);
    }
}

pub(super) fn enhance_destination_input(shared: &Rc<Shared>, document: &Document) {
    let Some(input) = document
        .get_element_by_id("destination")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    // Replacing the pending timeout cancels the previous one
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let debounce = timer_ms(shared.config().suggestion_debounce_ms);
    let source = input.clone();
    shared.listen(&input, "input", move |_| {
        let query = source.value();
        let input = source.clone();
        let timeout = Timeout::new(debounce, move || show_suggestions(&input, &query));
        pending.borrow_mut().replace(timeout);
    });

    // One document listener handles item picks and outside clicks
    let doc = document.clone();
    shared.listen(document, "click", move |ev| {
        let Some(list) = doc.get_element_by_id(LIST_ID) else { return };
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else { return };

        if list.contains(Some(&target)) {
            let picked = target
                .dyn_ref::<Element>()
                .and_then(|el| el.closest(".suggestion-item").ok().flatten())
                .and_then(|item| item.text_content());
            if let Some(text) = picked {
                input.set_value(&text);
                list.remove();
            }
        } else if !input.contains(Some(&target)) {
            list.remove();
        }
    });
}

fn show_suggestions(input: &HtmlInputElement, query: &str) {
    let matches = suggest(query, LEGACY_DESTINATIONS, SuggestionRule::LEGACY);
    if matches.is_empty() {
        return;
    }
    if let Err(e) = render_suggestions(input, &matches) {
        log::warn!(target: "Legacy", "Could not render suggestions: {:?}", e);
    }
}

fn render_suggestions(input: &HtmlInputElement, matches: &[&str]) -> Result<(), JsValue> {
    let Some(document) = input.owner_document() else { return Ok(()) };
    if let Some(existing) = document.get_element_by_id(LIST_ID) {
        existing.remove();
    }
    let Some(parent) = input.parent_element() else { return Ok(()) };

    let list = document.create_element("div")?;
    list.set_id(LIST_ID);
    list.set_class_name("suggestions-dropdown");
    for destination in matches {
        let item = document.create_element("div")?;
        item.set_class_name("suggestion-item");
        item.set_text_content(Some(destination));
        list.append_child(&item)?;
    }

    if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
        parent.style().set_property("position", "relative")?;
    }
    parent.append_child(&list)?;
    Ok(())
}
