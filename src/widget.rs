//! Autocomplete widget
//!
//! Owns the debounce timer, the latest dispatched request id and the current
//! suggestion list. The application feeds it input, clicks, keys, timer
//! ticks and worker responses; it answers with requests to send and
//! navigation targets.

mod debouncer;
mod widget_state;
pub mod widget_render;

pub use debouncer::Debouncer;
pub use widget_state::{AutocompleteWidget, Navigation, WidgetPhase};
