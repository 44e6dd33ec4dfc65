//! Form enhancement: submit and per-field validation, error injection and the
//! submit-button loading state.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use trip_forms::input_rules::{check_input, digits_only, InputKind};
use trip_forms::{validate, Field, TripForm};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::alerts::{show_alert, AlertKind};
use super::dom::{field_value, input_type, page_forms, query_all, query_one};
use super::{timer_ms, Shared};

const ITINERARY_FORM_ID: &str = "itineraryForm";
const REQUIRED_SELECTOR: &str = "input[required], select[required]";
const DEFAULT_LOADING_TEXT: &str = "Processing...";

pub(super) fn enhance_forms(shared: &Rc<Shared>, document: &Document) {
    for form in page_forms(document) {
        let weak = Rc::downgrade(shared);
        let target = form.clone();
        shared.listen(&form, "submit", move |ev| {
            // Another handler already stopped it
            if ev.default_prevented() {
                return;
            }
            let Some(shared) = weak.upgrade() else { return };
            if !validate_form(&shared, &target) {
                ev.prevent_default();
                return;
            }
            if let Some(button) = query_one::<HtmlButtonElement>(&target, "button[type=\"submit\"]") {
                show_loading_state(&shared, &button);
            }
        });

        for input in query_all::<Element>(form.query_selector_all(REQUIRED_SELECTOR)) {
            let field = input.clone();
            shared.listen(&input, "blur", move |_| {
                validate_input(&field);
            });
            let field = input.clone();
            shared.listen(&input, "input", move |_| clear_validation_error(&field));
        }
    }
}

/// Keep only digits in `#budget` as the user types.
///
/// Bounds are checked on blur and submit, not here.
pub(super) fn restrict_budget_input(shared: &Rc<Shared>, document: &Document) {
    let Some(budget) = document
        .get_element_by_id("budget")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let input = budget.clone();
    shared.listen(&budget, "input", move |_| {
        let value = input.value();
        let digits = digits_only(&value);
        if digits != value {
            input.set_value(&digits);
        }
    });
}

/// Check one field against its required/type/range attributes
fn validate_input(input: &Element) -> bool {
    let kind = InputKind::from_attrs(&input_type(input), input.get_attribute("min"), input.get_attribute("max"));
    match check_input(&kind, input.has_attribute("required"), &field_value(input)) {
        Ok(()) => {
            clear_validation_error(input);
            true
        }
        Err(message) => {
            show_input_error(input, &message);
            false
        }
    }
}

/// Validate every required field, then the trip rules on the itinerary form.
/// All fields are checked so every error shows at once.
fn validate_form(shared: &Shared, form: &HtmlFormElement) -> bool {
    let mut valid = true;
    for input in query_all::<Element>(form.query_selector_all(REQUIRED_SELECTOR)) {
        valid &= validate_input(&input);
    }
    if form.id() == ITINERARY_FORM_ID {
        valid &= validate_trip_fields(shared, form);
    }
    valid
}

fn named(form: &HtmlFormElement, name: &str) -> Option<Element> {
    query_one::<Element>(form, &format!("[name=\"{}\"]", name))
}

fn read_trip_form(form: &HtmlFormElement) -> TripForm {
    let text = |field: Field| named(form, field.name()).map(|el| field_value(&el)).unwrap_or_default();
    let interests = query_all::<HtmlInputElement>(form.query_selector_all("input[name=\"interests\"]:checked"))
        .into_iter()
        .map(|input| input.value())
        .collect();
    TripForm {
        destination: text(Field::Destination),
        start_date: text(Field::StartDate),
        end_date: text(Field::EndDate),
        budget: text(Field::Budget),
        interests,
    }
}

/// Shared trip rules. Fields the page does not render are not judged.
fn validate_trip_fields(shared: &Shared, form: &HtmlFormElement) -> bool {
    let Err(errors) = validate(&read_trip_form(form)) else {
        return true;
    };

    let mut valid = true;
    for (field, message) in errors.iter() {
        let Some(input) = named(form, field.name()) else { continue };
        valid = false;
        if field == Field::Interests {
            if let Some(document) = form.owner_document() {
                show_alert(shared, &document, message, AlertKind::Warning);
            }
        } else {
            show_input_error(&input, message);
        }
    }
    valid
}

/// Mark `input` invalid and put `message` under it
pub(super) fn show_input_error(input: &Element, message: &str) {
    clear_validation_error(input);
    let _ = input.class_list().add_1("is-invalid");

    let (Some(parent), Some(document)) = (input.parent_element(), input.owner_document()) else {
        return;
    };
    if let Ok(feedback) = document.create_element("div") {
        feedback.set_class_name("invalid-feedback");
        feedback.set_text_content(Some(message));
        let _ = parent.append_child(&feedback);
    }
}

pub(super) fn clear_validation_error(input: &Element) {
    let _ = input.class_list().remove_1("is-invalid");
    if let Some(feedback) = input
        .parent_element()
        .and_then(|parent| parent.query_selector(".invalid-feedback").ok().flatten())
    {
        feedback.remove();
    }
}

/// Spinner and disabled state until the page navigates. Restored by a fallback
/// timer if the page is still here.
fn show_loading_state(shared: &Shared, button: &HtmlButtonElement) {
    let dataset = button.dataset();
    let loading_text = dataset.get("loadingText").unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_string());
    let _ = dataset.set("originalContent", &button.inner_html());

    let document = button.owner_document();
    button.set_inner_html("");
    if let Some(document) = document {
        if let Ok(spinner) = document.create_element("span") {
            spinner.set_class_name("spinner-border spinner-border-sm me-2");
            let _ = button.append_child(&spinner);
        }
        let _ = button.append_child(&document.create_text_node(&loading_text));
    }
    button.set_disabled(true);

    let button = button.clone();
    shared.keep_timeout(Timeout::new(timer_ms(shared.config().loading_restore_ms), move || {
        if button.disabled() {
            hide_loading_state(&button);
        }
    }));
}

fn hide_loading_state(button: &HtmlButtonElement) {
    let dataset = button.dataset();
    if let Some(original) = dataset.get("originalContent") {
        button.set_inner_html(&original);
        dataset.delete("originalContent");
    }
    button.set_disabled(false);
}
