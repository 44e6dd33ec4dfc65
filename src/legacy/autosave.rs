//! Itinerary form autosave to `localStorage`.

use std::rc::Rc;

use trip_forms::autosave::FieldValue;
use trip_forms::Autosave;
use web_sys::{Document, Element, HtmlInputElement};
use wasm_bindgen::JsCast;

use super::dom::{field_name, field_value, input_type, query_all, set_field_value};
use super::Shared;
use crate::browser::LocalStore;

/// Input types whose values are never persisted
const SKIPPED_TYPES: &[&str] = &["hidden", "submit", "button", "file", "password"];

/// Storage name for a field. Checkboxes sharing a name are kept apart by value.
fn storage_name(el: &Element) -> Option<String> {
    let name = field_name(el);
    if name.is_empty() || SKIPPED_TYPES.contains(&input_type(el).as_str()) {
        return None;
    }
    match as_checkbox(el).map(|cb| cb.value()) {
        Some(value) if !value.is_empty() && value != "on" => Some(format!("{}_{}", name, value)),
        _ => Some(name),
    }
}

fn as_checkbox(el: &Element) -> Option<&HtmlInputElement> {
    el.dyn_ref::<HtmlInputElement>().filter(|input| input.type_() == "checkbox")
}

pub(super) fn enable_form_autosave(shared: &Rc<Shared>, document: &Document) {
    let Some(form) = document.get_element_by_id("itineraryForm") else { return };
    let store = match LocalStore::open() {
        Ok(store) => store,
        Err(e) => {
            log::warn!(target: "Autosave", "Autosave disabled: {}", e);
            return;
        }
    };
    let autosave = Rc::new(Autosave::new(store, shared.config().autosave_prefix.clone()));

    let fields: Vec<(Element, String)> = query_all::<Element>(form.query_selector_all("input, select, textarea"))
        .into_iter()
        .filter_map(|el| storage_name(&el).map(|name| (el, name)))
        .collect();

    for (field, name) in &fields {
        restore(&autosave, field, name);

        let autosave = autosave.clone();
        let el = field.clone();
        let name = name.clone();
        shared.listen(field, "change", move |_| {
            let value = match as_checkbox(&el) {
                Some(cb) => FieldValue::Checked(cb.checked()),
                None => FieldValue::Text(field_value(&el)),
            };
            if let Err(e) = autosave.save(&name, &value) {
                log::warn!(target: "Autosave", "Could not save {}: {}", name, e);
            }
        });
    }

    let names: Vec<String> = fields.into_iter().map(|(_, name)| name).collect();
    shared.listen(&form, "submit", move |ev| {
        // Validation blocked it; keep the draft
        if ev.default_prevented() {
            return;
        }
        if let Err(e) = autosave.clear(names.iter().map(String::as_str)) {
            log::warn!(target: "Autosave", "Could not clear saved fields: {}", e);
        }
    });
}

fn restore(autosave: &Autosave<LocalStore>, field: &Element, name: &str) {
    let restored = match as_checkbox(field) {
        Some(cb) => autosave.load_checked(name).map(|saved| {
            if let Some(checked) = saved {
                cb.set_checked(checked);
            }
        }),
        None => autosave.load_text(name).map(|saved| {
            if let Some(value) = saved {
                set_field_value(field, &value);
            }
        }),
    };
    if let Err(e) = restored {
        log::warn!(target: "Autosave", "Could not restore {}: {}", name, e);
    }
}
