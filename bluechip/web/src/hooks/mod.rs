//! Hooks binding the core interaction state to browser events.
mod listener;
mod responsive;
mod scroll_affordance;

pub use listener::{use_document_listener, use_window_listener};
pub use responsive::{use_media_query, use_viewport_narrower_than};
pub use scroll_affordance::{use_scroll_row, ScrollRow};
