//! Start/end date inputs kept in a valid order.

use std::rc::Rc;

use trip_forms::dates::{adjust_end_date, end_date_acceptable};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use super::alerts::{show_alert, AlertKind};
use super::Shared;
use crate::browser;

const END_DATE_ALERT: &str = "End date must be after start date";

fn date_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

pub(super) fn initialize_date_validation(shared: &Rc<Shared>, document: &Document) {
    let (Some(start), Some(end)) = (date_input(document, "start_date"), date_input(document, "end_date")) else {
        return;
    };

    let today = browser::today_iso();
    start.set_min(&today);
    end.set_min(&today);

    let (start_input, end_input) = (start.clone(), end.clone());
    shared.listen(&start, "change", move |_| {
        let Some(adjustment) = adjust_end_date(&start_input.value(), &end_input.value()) else {
            return;
        };
        end_input.set_min(&adjustment.min);
        if let Some(value) = adjustment.replace_value {
            end_input.set_value(&value);
        }
    });

    let weak = Rc::downgrade(shared);
    let (start_input, end_input) = (start, end.clone());
    let doc = document.clone();
    shared.listen(&end, "change", move |_| {
        if end_date_acceptable(&start_input.value(), &end_input.value()) {
            return;
        }
        end_input.set_value("");
        if let Some(shared) = weak.upgrade() {
            show_alert(&shared, &doc, END_DATE_ALERT, AlertKind::Warning);
        }
    });
}
