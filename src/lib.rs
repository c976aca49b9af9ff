//! nowbar - terminal now-playing progress indicator.
//!
//! The core is [`indicator`]: a ratatui widget showing a bounded playback
//! position as a draggable slider with time labels, synchronized from an
//! external owner and reporting user drags through a change listener.
//! Around it sit the theme-token layer ([`theme`], [`config`]), track
//! metadata ([`track`]), and a demo [`player`] that owns the
//! authoritative playback clock.

pub mod cli;
pub mod commands;
pub mod config;
pub mod indicator;
pub mod player;
pub mod theme;
pub mod track;
