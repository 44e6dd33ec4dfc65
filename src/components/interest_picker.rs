//! Interest Picker Component
//!
//! Grid of toggleable travel interests.

use leptos::prelude::*;
use trip_forms::interests::INTEREST_OPTIONS;

use crate::store::{store_toggle_interest, use_form_store, FormStateStoreFields};

#[component]
pub fn InterestPicker() -> impl IntoView {
    let store = use_form_store();

    view! {
        <div class="row g-2">
            {INTEREST_OPTIONS.iter().map(|(label, icon)| {
                let label = *label;
                let is_selected = move || store.interests().with(|sel| sel.iter().any(|i| i == label));
                view! {
                    <div class="col-md-6 col-lg-4">
                        <div
                            class=move || if is_selected() {
                                "interest-card p-3 text-center border rounded transition border-primary bg-primary text-white"
                            } else {
                                "interest-card p-3 text-center border rounded transition border-light bg-light"
                            }
                            style="cursor: pointer;"
                            on:click=move |_| store_toggle_interest(&store, label)
                        >
                            <i class=format!("fas fa-{} mb-2", icon)></i>
                            <div>{label}</div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
