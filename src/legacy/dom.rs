//! DOM Utilities
//!
//! Owned event listeners and small element helpers for the legacy layer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    NodeList,
};

use crate::app::mount_root_selector;

/// Event listener removed from its target when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Collect a `querySelectorAll` result, keeping nodes of type `T`
pub fn query_all<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Server-rendered forms, leaving out those inside a component container
pub fn page_forms(document: &Document) -> Vec<HtmlFormElement> {
    let roots = mount_root_selector();
    query_all::<HtmlFormElement>(document.query_selector_all("form"))
        .into_iter()
        .filter(|form| !matches!(form.closest(&roots), Ok(Some(_))))
        .collect()
}

pub fn query_one<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

/// Value of an input, select or textarea
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// `type` of an input; selects and textareas count as text
pub fn input_type(el: &Element) -> String {
    el.dyn_ref::<HtmlInputElement>()
        .map(|input| input.type_())
        .unwrap_or_else(|| "text".to_string())
}

pub fn field_name(el: &Element) -> String {
    el.get_attribute("name").unwrap_or_default()
}
