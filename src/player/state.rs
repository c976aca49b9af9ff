//! Player state management
//!
//! Contains the `PlayerState` struct owning the authoritative playback
//! clock, as well as the control-flow result shared by input handlers.

use std::time::Instant;

use tracing::debug;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
}

/// The authoritative playback clock for the demo player.
///
/// The position derives from wall-clock time: an `Instant` marking when
/// playback last started or seeked, plus the offset it started from. The
/// indicator never owns this truth; it is synced from here every tick.
#[derive(Debug)]
pub struct PlayerState {
    /// Whether playback is paused
    pub paused: bool,
    /// Track length in seconds
    duration: f64,
    /// Wall clock time when playback started/resumed/seeked
    start_time: Instant,
    /// Position the clock started from (seconds)
    time_offset: f64,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Create a player positioned at `start_at` seconds into a track.
    ///
    /// `start_at` is clamped into the track; a negative duration is
    /// treated as zero.
    pub fn new(duration: f64, start_at: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            paused: false,
            duration,
            start_time: Instant::now(),
            time_offset: start_at.clamp(0.0, duration),
            needs_render: true,
        }
    }

    /// Track length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Current playback position, clamped to the track.
    pub fn position(&self) -> f64 {
        let elapsed = if self.paused {
            0.0
        } else {
            self.start_time.elapsed().as_secs_f64()
        };
        (self.time_offset + elapsed).min(self.duration)
    }

    /// Whether the clock has reached the end of the track.
    pub fn finished(&self) -> bool {
        self.position() >= self.duration
    }

    /// Jump to an absolute position, restarting the clock from there.
    pub fn seek_to(&mut self, position: f64) {
        let target = position.clamp(0.0, self.duration);
        debug!(target, "seek");
        self.time_offset = target;
        self.start_time = Instant::now();
        self.needs_render = true;
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta: f64) {
        self.seek_to(self.position() + delta);
    }

    /// Toggle pause state, freezing or restarting the clock.
    pub fn toggle_pause(&mut self) {
        let position = self.position();
        self.paused = !self.paused;
        // Carry the position across the transition so the clock neither
        // jumps nor keeps running while paused
        self.time_offset = position;
        self.start_time = Instant::now();
        self.needs_render = true;
    }

    /// Resume playback if paused (used after a seek).
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.start_time = Instant::now();
            self.needs_render = true;
        }
    }
}
