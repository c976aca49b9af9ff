//! Input handling for the player.
//!
//! Dispatches keyboard and mouse events to the appropriate handlers and
//! returns control flow signals to the main loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::indicator::IndicatorState;
use crate::player::state::{InputResult, PlayerState};
use crate::player::ui::PlayerLayout;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    layout: &PlayerLayout,
    indicator: &mut IndicatorState,
    player: &mut PlayerState,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player),
        Event::Mouse(mouse) => handle_mouse_event(mouse, layout, indicator, player),
        Event::Resize(_, _) => {
            player.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus/paste events
    }
}
