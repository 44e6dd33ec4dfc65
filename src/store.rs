//! Itinerary Form Store
//!
//! Uses Leptos reactive_stores for field-level reactivity of the trip form.

use leptos::prelude::*;
use reactive_stores::Store;
use trip_forms::TripForm;

/// Trip form fields, each independently reactive
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    /// Selected interests, in click order
    pub interests: Vec<String>,
}

impl FormState {
    pub fn to_trip_form(&self) -> TripForm {
        TripForm {
            destination: self.destination.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            budget: self.budget.clone(),
            interests: self.interests.clone(),
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context (provided by `ItineraryForm`)
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the current form values, without tracking
pub fn store_snapshot(store: &FormStore) -> TripForm {
    store.read_untracked().to_trip_form()
}

/// Toggle one interest on or off
pub fn store_toggle_interest(store: &FormStore, interest: &str) {
    store.interests().update(|selected| trip_forms::interests::toggle(selected, interest));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_every_field() {
        let state = FormState {
            destination: "Goa, India".into(),
            start_date: "2025-01-05".into(),
            end_date: "2025-01-10".into(),
            budget: "5000".into(),
            interests: vec!["Beach".into()],
        };
        let form = state.to_trip_form();
        assert_eq!(form.destination, "Goa, India");
        assert_eq!(form.interests, vec!["Beach"]);
        assert!(trip_forms::validate(&form).is_ok());
    }
}
