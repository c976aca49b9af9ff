//! Mouse input handling for the player.
//!
//! Press or drag on the slider row maps the column to a track position
//! and routes it through the indicator's drag path, so the change
//! listener seeks the owner's clock.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::indicator::IndicatorState;
use crate::player::state::{InputResult, PlayerState};
use crate::player::ui::PlayerLayout;

/// Handle a mouse event.
///
/// Handles left press and left drag on the slider row; everything else
/// is ignored.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    layout: &PlayerLayout,
    indicator: &mut IndicatorState,
    player: &mut PlayerState,
) -> InputResult {
    let pressed = matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    );
    if !pressed {
        return InputResult::Continue;
    }

    let bar = layout.slider_rect();
    if bar.height == 0 || !bar.contains(Position::new(mouse.column, mouse.row)) {
        return InputResult::Continue;
    }

    // Map the column to a position on the track
    let offset = f64::from(mouse.column - bar.x);
    let ratio = offset / f64::from(bar.width);
    let target = ratio * player.duration();

    indicator.drag_to(target, &mut |position| player.seek_to(position));

    // Resume playback after seeking
    player.resume();

    InputResult::Continue
}
