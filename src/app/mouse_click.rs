//! Mouse click handling
//!
//! Routes left clicks to the widget: rows navigate, the input and popup
//! frame are inert, anything else counts as an outside click.

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    if let Some(navigation) = app.widget.on_click(region) {
        app.navigate(navigation);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
