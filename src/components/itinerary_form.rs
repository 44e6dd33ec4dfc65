//! Itinerary Form Component
//!
//! Destination, dates, budget and interests, validated and posted to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use trip_forms::{validate, Field, SubmitOutcome, ValidationErrors};

use crate::api;
use crate::browser;
use crate::components::{DestinationAutocomplete, InterestPicker};
use crate::context::use_app_context;
use crate::store::{store_snapshot, FormState, FormStateStoreFields, FormStore};

const SUBMIT_FAILED_MESSAGE: &str = "Failed to generate itinerary. Please try again.";

/// Field-level message for `field`, if validation flagged it
fn field_error(errors: ReadSignal<ValidationErrors>, field: Field) -> impl Fn() -> Option<String> + Copy {
    move || errors.with(|e| e.get(field).map(str::to_string))
}

fn control_class(errors: ReadSignal<ValidationErrors>, field: Field) -> impl Fn() -> &'static str + Copy {
    move || {
        if errors.with(|e| e.contains(field)) {
            "form-control form-control-lg is-invalid"
        } else {
            "form-control form-control-lg"
        }
    }
}

/// Act on the backend's answer
fn follow_outcome(outcome: SubmitOutcome) {
    let result = match outcome {
        SubmitOutcome::Navigate(url) => {
            log::info!(target: "ItineraryForm", "Itinerary ready, navigating to {}", url);
            browser::navigate(&url)
        }
        SubmitOutcome::Reload => browser::reload(),
        SubmitOutcome::Failed { status } => {
            log::warn!(target: "ItineraryForm", "Generation failed with status {}", status);
            browser::alert(SUBMIT_FAILED_MESSAGE);
            Ok(())
        }
    };
    if let Err(e) = result {
        log::error!(target: "ItineraryForm", "Navigation failed: {}", e);
    }
}

#[component]
pub fn ItineraryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store: FormStore = Store::new(FormState::default());
    provide_context(store);

    let (errors, set_errors) = signal(ValidationErrors::default());
    let (submitting, set_submitting) = signal(false);
    let today = browser::today_iso();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // One submission at a time
        if submitting.get_untracked() {
            return;
        }

        let form = store_snapshot(&store);
        if let Err(errs) = validate(&form) {
            log::info!(target: "ItineraryForm", "Validation failed: {}", errs);
            set_errors.set(errs);
            return;
        }
        set_errors.set(ValidationErrors::default());
        set_submitting.set(true);

        let ctx = ctx.clone();
        spawn_local(async move {
            match api::generate_itinerary(ctx.config(), &form).await {
                Ok(outcome) => follow_outcome(outcome),
                Err(e) => {
                    log::error!(target: "ItineraryForm", "Submit failed: {}", e);
                    browser::alert(SUBMIT_FAILED_MESSAGE);
                }
            }
            // The page may already be navigating away
            set_submitting.try_set(false);
        });
    };

    let today_for_end = today.clone();
    let end_min = move || {
        let start = store.start_date().get();
        if start.is_empty() { today_for_end.clone() } else { start }
    };

    view! {
        <div class="row justify-content-center">
            <div class="col-lg-8">
                <div class="card border-0 shadow-lg">
                    <div class="card-body p-5">
                        <h3 class="text-center mb-4 text-primary">"Plan Your Perfect Trip"</h3>

                        <form on:submit=on_submit novalidate=true>
                            // Destination
                            <div class="mb-4 position-relative">
                                <label class="form-label fw-bold">
                                    <i class="fas fa-map-marker-alt me-2 text-primary"></i>
                                    "Where do you want to go?"
                                </label>
                                <DestinationAutocomplete
                                    value=Signal::derive(move || store.destination().get())
                                    invalid=Signal::derive(move || errors.with(|e| e.contains(Field::Destination)))
                                    on_change=move |v: String| store.destination().set(v)
                                />
                                {move || field_error(errors, Field::Destination)().map(|m| view! {
                                    <div class="invalid-feedback d-block">{m}</div>
                                })}
                            </div>

                            // Dates
                            <div class="row mb-4">
                                <div class="col-md-6">
                                    <label class="form-label fw-bold">
                                        <i class="fas fa-calendar-alt me-2 text-primary"></i>
                                        "Start Date"
                                    </label>
                                    <input
                                        type="date"
                                        name="start_date"
                                        class=control_class(errors, Field::StartDate)
                                        min=today
                                        prop:value=move || store.start_date().get()
                                        on:input=move |ev| store.start_date().set(event_target_value(&ev))
                                    />
                                    {move || field_error(errors, Field::StartDate)().map(|m| view! {
                                        <div class="invalid-feedback">{m}</div>
                                    })}
                                </div>
                                <div class="col-md-6">
                                    <label class="form-label fw-bold">
                                        <i class="fas fa-calendar-check me-2 text-primary"></i>
                                        "End Date"
                                    </label>
                                    <input
                                        type="date"
                                        name="end_date"
                                        class=control_class(errors, Field::EndDate)
                                        min=end_min
                                        prop:value=move || store.end_date().get()
                                        on:input=move |ev| store.end_date().set(event_target_value(&ev))
                                    />
                                    {move || field_error(errors, Field::EndDate)().map(|m| view! {
                                        <div class="invalid-feedback">{m}</div>
                                    })}
                                </div>
                            </div>

                            // Budget
                            <div class="mb-4">
                                <label class="form-label fw-bold">
                                    <i class="fas fa-rupee-sign me-2 text-primary"></i>
                                    "Budget (INR)"
                                </label>
                                <input
                                    type="number"
                                    name="budget"
                                    class=control_class(errors, Field::Budget)
                                    placeholder="Enter your budget in ₹"
                                    min="1000"
                                    prop:value=move || store.budget().get()
                                    on:input=move |ev| store.budget().set(event_target_value(&ev))
                                />
                                {move || field_error(errors, Field::Budget)().map(|m| view! {
                                    <div class="invalid-feedback">{m}</div>
                                })}
                            </div>

                            // Interests
                            <div class="mb-4">
                                <label class="form-label fw-bold">
                                    <i class="fas fa-heart me-2 text-primary"></i>
                                    "What interests you?"
                                </label>
                                <InterestPicker />
                                {move || field_error(errors, Field::Interests)().map(|m| view! {
                                    <div class="text-danger mt-2">{m}</div>
                                })}
                            </div>

                            <div class="text-center">
                                <button
                                    type="submit"
                                    class="btn btn-primary btn-lg px-5"
                                    disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() {
                                        view! {
                                            <span class="spinner-border spinner-border-sm me-2"></span>
                                            "Generating Your Perfect Trip..."
                                        }.into_any()
                                    } else {
                                        view! {
                                            <i class="fas fa-magic me-2"></i>
                                            "Generate My Itinerary"
                                        }.into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
