//! Playback progress indicator.
//!
//! A ratatui widget showing a bounded position within `[0, max]` as a
//! draggable slider with elapsed/remaining time labels, plus title and
//! artist text. The owner pushes authoritative position updates with
//! [`IndicatorState::sync`]; user drags go through
//! [`IndicatorState::drag_to`], which notifies a [`ChangeListener`] so the
//! owner can seek.

mod format;
mod state;
mod widget;

pub use format::{format_clock, format_remaining};
pub use state::{reconcile, ChangeListener, IndicatorState};
pub use widget::ProgressIndicator;
