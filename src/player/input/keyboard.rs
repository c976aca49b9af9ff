//! Keyboard input handling for the player.
//!
//! Keyboard seeks act on the owner's clock directly; the indicator picks
//! the change up on the next sync, the same way any external update
//! arrives.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, PlayerState};

/// Arrow-key seek step, in seconds.
const SEEK_STEP_SECS: f64 = 5.0;

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, player: &mut PlayerState) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') => {
            player.toggle_pause();
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            player.seek_by(-SEEK_STEP_SECS);
            InputResult::Continue
        }
        KeyCode::Right => {
            player.seek_by(SEEK_STEP_SECS);
            InputResult::Continue
        }
        KeyCode::Home => {
            player.seek_to(0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            player.seek_to(player.duration());
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
