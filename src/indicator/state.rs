//! Display-position state for the progress indicator.
//!
//! The indicator shows one number: the position the user currently sees.
//! Two sources feed it - the owner's authoritative playback position and
//! the user's slider drags. `reconcile` is the explicit rule for which one
//! wins.

use tracing::debug;

/// Observer for user-initiated position changes.
///
/// Invoked exactly once per discrete drag-change event, synchronously,
/// with the position the user selected. Any `FnMut(f64)` closure works.
pub trait ChangeListener {
    /// Called with the newly dragged position.
    fn on_change(&mut self, position: f64);
}

impl<F: FnMut(f64)> ChangeListener for F {
    fn on_change(&mut self, position: f64) {
        self(position);
    }
}

/// Pick the displayed position: a drag in flight wins over the external
/// value, otherwise the external value is the truth.
pub fn reconcile(external: f64, drag_in_flight: Option<f64>) -> f64 {
    drag_in_flight.unwrap_or(external)
}

/// Display state for [`ProgressIndicator`](super::ProgressIndicator).
///
/// Holds the externally supplied position plus an optional drag value that
/// has not yet been confirmed by an external update. There is no pending
/// state beyond that: the next [`sync`](Self::sync) always wins and
/// collapses an in-flight drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorState {
    external: f64,
    drag_in_flight: Option<f64>,
}

impl IndicatorState {
    /// Create state displaying `initial` from the very first frame.
    pub fn new(initial: f64) -> Self {
        Self {
            external: initial,
            drag_in_flight: None,
        }
    }

    /// The position currently shown.
    pub fn position(&self) -> f64 {
        reconcile(self.external, self.drag_in_flight)
    }

    /// Whether a drag value is showing instead of the external one.
    pub fn is_dragging(&self) -> bool {
        self.drag_in_flight.is_some()
    }

    /// Overwrite the display with a new external value.
    ///
    /// One-way synchronization: external truth always wins on update,
    /// discarding any unconfirmed drag state.
    pub fn sync(&mut self, value: f64) {
        self.external = value;
        self.drag_in_flight = None;
    }

    /// Apply a user drag to `position` and notify the listener.
    ///
    /// The display updates immediately, without waiting for the owner to
    /// confirm, and the listener fires exactly once with the dragged
    /// value.
    pub fn drag_to(&mut self, position: f64, listener: &mut dyn ChangeListener) {
        debug!(position, "slider dragged");
        self.drag_in_flight = Some(position);
        listener.on_change(position);
    }
}
