//! Weather Widget Component
//!
//! Current weather for a destination, refetched when the destination changes.
//! Failures show a retry button; nothing is retried automatically.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trip_forms::weather::{condition_icon, format_visibility_km, round_degrees};
use trip_forms::TemperatureBand;

use crate::api;
use crate::context::use_app_context;
use crate::models::WeatherSnapshot;

#[derive(Debug, Clone, PartialEq)]
enum WeatherState {
    /// No destination to look up
    Idle,
    Loading,
    Failed,
    Ready(WeatherSnapshot),
}

#[component]
pub fn WeatherWidget(#[prop(into)] destination: Signal<String>) -> impl IntoView {
    let config = StoredValue::new(use_app_context().config().clone());
    let (state, set_state) = signal(WeatherState::Loading);
    // Only the latest request may write its result
    let request_seq = StoredValue::new(0u64);

    let load = move || {
        let dest = destination.get_untracked();
        if dest.trim().is_empty() {
            set_state.set(WeatherState::Idle);
            return;
        }
        request_seq.update_value(|s| *s += 1);
        let seq = request_seq.get_value();
        set_state.set(WeatherState::Loading);

        let config = config.get_value();
        spawn_local(async move {
            let result = api::fetch_weather(&config, &dest).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            let next = match result {
                Ok(snapshot) => WeatherState::Ready(snapshot),
                Err(e) => {
                    log::warn!(target: "Weather", "Weather for {} unavailable: {}", dest, e);
                    WeatherState::Failed
                }
            };
            set_state.try_set(next);
        });
    };

    Effect::new(move |_| {
        destination.track();
        load();
    });

    view! {
        {move || match state.get() {
            WeatherState::Idle => ().into_any(),
            WeatherState::Loading => view! {
                <div class="card border-0 shadow-sm">
                    <div class="card-body text-center">
                        <div class="spinner-border spinner-border-sm text-primary"></div>
                        <p class="mt-2 mb-0 text-muted">"Loading weather..."</p>
                    </div>
                </div>
            }.into_any(),
            WeatherState::Failed => view! {
                <div class="card border-0 shadow-sm">
                    <div class="card-body text-center">
                        <i class="fas fa-exclamation-triangle text-warning mb-2"></i>
                        <p class="mb-2 text-muted">"Weather data unavailable"</p>
                        <button class="btn btn-outline-primary btn-sm" on:click=move |_| load()>
                            <i class="fas fa-redo me-1"></i>
                            "Retry"
                        </button>
                    </div>
                </div>
            }.into_any(),
            WeatherState::Ready(snapshot) => view! {
                <WeatherCard snapshot=snapshot on_refresh=move |_: ()| load() />
            }.into_any(),
        }}
    }
}

#[component]
fn WeatherCard(snapshot: WeatherSnapshot, #[prop(into)] on_refresh: Callback<()>) -> impl IntoView {
    let (main, description) = snapshot
        .condition()
        .map(|c| (c.main.clone(), c.description.clone()))
        .unwrap_or_default();
    let temp_class = format!("h4 mb-0 {}", TemperatureBand::from_celsius(snapshot.main.temp).css_class());
    let alert = snapshot.alerts.first().map(|a| a.description.clone());

    view! {
        <div class="card border-0 shadow-sm">
            <div class="card-header bg-primary text-white">
                <h6 class="mb-0">
                    <i class="fas fa-cloud-sun me-2"></i>
                    "Current Weather"
                </h6>
            </div>
            <div class="card-body">
                <div class="row align-items-center">
                    <div class="col-6">
                        <div class="text-center">
                            <i class=format!("fas fa-{} fa-2x text-primary mb-2", condition_icon(&main))></i>
                            <div class=temp_class>{format!("{}°C", round_degrees(snapshot.main.temp))}</div>
                            <small class="text-muted">{description}</small>
                        </div>
                    </div>
                    <div class="col-6">
                        <div class="weather-details">
                            <DetailRow label="Feels like" value=format!("{}°C", round_degrees(snapshot.main.feels_like)) />
                            <DetailRow label="Humidity" value=format!("{}%", snapshot.main.humidity) />
                            <DetailRow label="Wind" value=format!("{} m/s", snapshot.wind_speed()) />
                            {snapshot.visibility.map(|v| view! {
                                <DetailRow label="Visibility" value=format_visibility_km(v) />
                            })}
                        </div>
                    </div>
                </div>

                {alert.map(|text| view! {
                    <div class="mt-3 alert alert-warning alert-sm">
                        <i class="fas fa-exclamation-triangle me-2"></i>
                        <small>{text}</small>
                    </div>
                })}

                <div class="mt-3 text-center">
                    <button class="btn btn-outline-primary btn-sm" on:click=move |_| on_refresh.run(())>
                        <i class="fas fa-sync-alt me-1"></i>
                        "Refresh"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-between align-items-center mb-1">
            <small class="text-muted">{label}</small>
            <small class="fw-bold">{value}</small>
        </div>
    }
}
