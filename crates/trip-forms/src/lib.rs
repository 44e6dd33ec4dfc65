//! Trip Forms
//!
//! Pure logic shared by the Leptos components and the legacy DOM layer.
//! Nothing in here touches the browser, so the whole crate is tested natively.

pub mod autosave;
pub mod checkpoint;
pub mod dates;
pub mod input_rules;
pub mod interests;
pub mod live_feed;
pub mod submission;
pub mod suggest;
pub mod validation;
pub mod weather;

pub use autosave::{Autosave, KeyValueStore, MemoryStore, StorageError};
pub use checkpoint::CheckpointState;
pub use live_feed::{LiveFeed, LiveUpdate};
pub use submission::SubmitOutcome;
pub use validation::{validate, Field, TripForm, ValidationErrors};
pub use weather::TemperatureBand;
