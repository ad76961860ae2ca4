//! Search-as-you-type artist finder
//!
//! Debounces keystrokes, queries a search endpoint returning
//! `[{ text, type, artistId }]`, shows the matches in a popup and resolves
//! the detail page of the one the user picks.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod markup;
pub mod search;
pub mod suggestion;
pub mod widget;
pub mod worker;

mod widgets;

#[cfg(test)]
mod test_utils;
