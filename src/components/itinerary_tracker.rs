//! Itinerary Tracker Component
//!
//! Checkpoint timeline for one itinerary, plus a live-updates panel.
//!
//! The periodic live updates are a demo simulation: messages are drawn at random
//! from a fixed pool on a timer and carry no real tracking data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trip_forms::live_feed::{simulated_message, INITIALIZED_MESSAGE, LOCATION_UPDATED_MESSAGE};
use trip_forms::{CheckpointState, LiveFeed, LiveUpdate};

use crate::api;
use crate::browser;
use crate::context::use_app_context;
use crate::models::Checkpoint;

fn new_update(message: &str) -> LiveUpdate {
    LiveUpdate {
        id: browser::now_millis(),
        time: browser::local_time_string(),
        message: message.to_string(),
    }
}

#[component]
pub fn ItineraryTracker(#[prop(into)] itinerary_id: String) -> impl IntoView {
    let ctx = use_app_context();

    let checkpoints = RwSignal::new(Vec::<Checkpoint>::new());
    let next_checkpoint = RwSignal::new(None::<Checkpoint>);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let feed = RwSignal::new(LiveFeed::new());

    let push_update = move |message: &str| {
        let update = new_update(message);
        feed.try_update(|f| f.push(update));
    };

    // Initial load
    {
        let config = ctx.config().clone();
        let id = itinerary_id.clone();
        spawn_local(async move {
            match api::fetch_checkpoints(&config, &id).await {
                Ok(data) => {
                    log::info!(target: "Tracker", "Loaded {} checkpoints for itinerary {}", data.checkpoints.len(), id);
                    checkpoints.try_set(data.checkpoints);
                    next_checkpoint.try_set(data.next_checkpoint);
                }
                Err(e) => {
                    log::error!(target: "Tracker", "Error fetching checkpoints for {}: {}", id, e);
                    load_error.try_set(Some("Tracking data is unavailable right now.".to_string()));
                }
            }
            loading.try_set(false);
        });
    }
    push_update(INITIALIZED_MESSAGE);

    // Demo-only status feed
    let chance = ctx.config().live_update_chance;
    match set_interval_with_handle(
        move || {
            if let Some(message) = simulated_message(browser::random(), browser::random(), chance) {
                push_update(message);
            }
        },
        ctx.config().tracker_tick(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!(target: "Tracker", "Could not start live update timer: {:?}", e),
    }

    let current_id = move || next_checkpoint.with(|c| c.as_ref().map(|c| c.id));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="text-center py-5">
                    <div class="spinner-border text-primary" role="status">
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                    <p class="mt-3 text-muted">"Loading tracking data..."</p>
                </div>
            }
        >
            <div class="row">
                // Current status
                <div class="col-12 mb-4">
                    <div class="card border-0 shadow-sm">
                        <div class="card-body">
                            <div class="row align-items-center">
                                <div class="col-md-8">
                                    <h5 class="mb-2">
                                        <i class="fas fa-map-pin me-2 text-primary"></i>
                                        "Current Status"
                                    </h5>
                                    {move || current_status(next_checkpoint.get(), load_error.get())}
                                </div>
                                <div class="col-md-4 text-md-end">
                                    <button class="btn btn-primary" on:click=move |_| push_update(LOCATION_UPDATED_MESSAGE)>
                                        <i class="fas fa-crosshairs me-2"></i>
                                        "Update Location"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                // Timeline
                <div class="col-lg-8 mb-4">
                    <div class="card border-0 shadow-sm">
                        <div class="card-header bg-white">
                            <h5 class="mb-0">
                                <i class="fas fa-route me-2 text-primary"></i>
                                "Journey Timeline"
                            </h5>
                        </div>
                        <div class="card-body">
                            <div class="timeline">
                                <For
                                    each=move || checkpoints.get()
                                    key=|c| c.id
                                    children=move |checkpoint| {
                                        let id = checkpoint.id;
                                        let completed = checkpoint.is_completed;
                                        let state = Signal::derive(move || {
                                            CheckpointState::from_flags(completed, current_id() == Some(id))
                                        });
                                        view! { <CheckpointRow checkpoint=checkpoint state=state /> }
                                    }
                                />
                            </div>
                        </div>
                    </div>
                </div>

                // Live updates (simulated)
                <div class="col-lg-4">
                    <LiveUpdatesPanel feed=feed.read_only() />
                </div>
            </div>
        </Show>
    }
}

fn current_status(next: Option<Checkpoint>, load_error: Option<String>) -> AnyView {
    if let Some(message) = load_error {
        return view! {
            <div class="text-warning">
                <i class="fas fa-exclamation-triangle me-2"></i>
                {message}
            </div>
        }.into_any();
    }
    match next {
        Some(next) => view! {
            <div>
                <div class="h6 text-primary">"Next: " {next.location}</div>
                <small class="text-muted">
                    <i class="fas fa-clock me-1"></i>
                    {format!("Scheduled for {} on Day {}", next.time, next.day)}
                </small>
            </div>
        }.into_any(),
        None => view! {
            <div class="text-success">
                <i class="fas fa-trophy me-2"></i>
                "Journey Complete!"
            </div>
        }.into_any(),
    }
}

/// One timeline entry
#[component]
fn CheckpointRow(checkpoint: Checkpoint, #[prop(into)] state: Signal<CheckpointState>) -> impl IntoView {
    let cost = (checkpoint.estimated_cost > 0.0).then(|| format!("₹{}", browser::format_amount(checkpoint.estimated_cost)));
    let completion = checkpoint
        .is_completed
        .then(|| checkpoint.completed_at.clone())
        .flatten()
        .map(|at| (browser::local_date_string(&at), checkpoint.notes.clone()));

    view! {
        <div class="timeline-item">
            <div class=move || format!("timeline-marker bg-{}", state.get().color())>
                <i class=move || format!("fas fa-{} text-white", state.get().icon())></i>
            </div>
            <div class="timeline-content">
                <div class="d-flex justify-content-between align-items-start">
                    <div>
                        <h6 class="mb-1">{checkpoint.location}</h6>
                        <p class="mb-1 text-muted">{checkpoint.activity}</p>
                        <small class="text-muted">{format!("Day {} - {}", checkpoint.day, checkpoint.time)}</small>
                    </div>
                    {cost.map(|c| view! { <span class="badge bg-light text-dark">{c}</span> })}
                </div>
                {completion.map(|(date, notes)| view! {
                    <div class="mt-2 p-2 bg-success bg-opacity-10 rounded">
                        <small class="text-success">
                            <i class="fas fa-check-circle me-1"></i>
                            {format!("Completed on {}", date)}
                        </small>
                        {notes.filter(|n| !n.is_empty()).map(|n| view! {
                            <div class="mt-1"><small class="text-muted">{n}</small></div>
                        })}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Newest-first list of simulated status messages
#[component]
fn LiveUpdatesPanel(feed: ReadSignal<LiveFeed>) -> impl IntoView {
    view! {
        <div class="card border-0 shadow-sm">
            <div class="card-header bg-white d-flex justify-content-between align-items-center">
                <h5 class="mb-0">
                    <i class="fas fa-bell me-2 text-primary"></i>
                    "Live Updates"
                </h5>
                <span class="badge bg-secondary" title="Simulated messages, not live tracking data">"Demo"</span>
            </div>
            <div class="card-body" style="max-height: 400px; overflow-y: auto;">
                {move || {
                    let updates = feed.with(|f| f.to_vec());
                    if updates.is_empty() {
                        view! { <p class="text-muted text-center">"No updates yet"</p> }.into_any()
                    } else {
                        updates.into_iter().map(|update| view! {
                            <div class="update-item mb-3 p-2 border-bottom">
                                <div class="d-flex justify-content-between align-items-start">
                                    <small class="text-primary fw-bold">{update.time}</small>
                                </div>
                                <div class="mt-1">
                                    <i class="fas fa-info-circle text-info me-2"></i>
                                    <small>{update.message}</small>
                                </div>
                            </div>
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
