//! Destination Autocomplete Component
//!
//! Destination input with substring suggestions from the popular destinations list.
//! Arrow keys move the highlight, Tab accepts it, Escape closes the list.

use leptos::prelude::*;
use trip_forms::suggest::{suggest, SuggestionRule, POPULAR_DESTINATIONS};

/// Suggestions for the current input value
pub fn destination_suggestions(query: &str) -> Vec<String> {
    suggest(query, POPULAR_DESTINATIONS, SuggestionRule::FORM)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Destination input with suggestions dropdown
///
/// Props:
/// - value: current destination text
/// - invalid: whether the field is flagged by validation
/// - on_change: called with the new value on typing and on selection
#[component]
pub fn DestinationAutocomplete(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let select = move |name: String| {
        on_change.run(name);
        set_suggestions.set(Vec::new());
        set_selected_idx.set(0);
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_suggestions.set(destination_suggestions(&text));
        set_selected_idx.set(0);
        on_change.run(text);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get_untracked();
        if sugg.is_empty() {
            return;
        }
        let sel = selected_idx.get_untracked();
        match ev.key().as_str() {
            "Tab" => {
                ev.prevent_default();
                if let Some(name) = sugg.get(sel) {
                    select(name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Escape" => set_suggestions.set(Vec::new()),
            _ => {}
        }
    };

    let input_class = move || {
        if invalid.get() {
            "form-control form-control-lg is-invalid"
        } else {
            "form-control form-control-lg"
        }
    };

    view! {
        <input
            type="text"
            name="destination"
            class=input_class
            placeholder="Enter your dream destination..."
            autocomplete="off"
            prop:value=move || value.get()
            on:input=on_input
            on:keydown=on_keydown
        />

        {move || {
            let sugg = suggestions.get();
            if sugg.is_empty() {
                return None;
            }
            let selected = selected_idx.get();
            Some(view! {
                <div class="position-absolute w-100 bg-white border rounded shadow-sm mt-1 destination-suggestions">
                    {sugg.into_iter().enumerate().map(|(i, name)| {
                        let name_for_click = name.clone();
                        view! {
                            <div
                                class=if i == selected { "p-3 border-bottom suggestion-item selected" } else { "p-3 border-bottom suggestion-item" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    select(name_for_click.clone());
                                }
                            >
                                <i class="fas fa-map-marker-alt me-2 text-muted"></i>
                                {name}
                            </div>
                        }
                    }).collect_view()}
                </div>
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_characters_are_not_enough() {
        assert!(destination_suggestions("Go").is_empty());
        assert_eq!(destination_suggestions("Goa"), vec!["Goa, India".to_string()]);
    }
}
