//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod destination_autocomplete;
mod interest_picker;
mod itinerary_form;
mod itinerary_tracker;
mod weather_widget;

pub use destination_autocomplete::DestinationAutocomplete;
pub use interest_picker::InterestPicker;
pub use itinerary_form::ItineraryForm;
pub use itinerary_tracker::ItineraryTracker;
pub use weather_widget::WeatherWidget;
