//! Layout and frame drawing for the player.
//!
//! The layout math is a pure function of the terminal area so that the
//! draw path and the mouse hit-testing path agree on where the slider is.

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::indicator::{IndicatorState, ProgressIndicator};
use crate::player::state::PlayerState;
use crate::theme::Theme;
use crate::track::Track;

/// Horizontal margin around the indicator, in columns.
const H_MARGIN: u16 = 2;
/// Rows the indicator occupies (title, slider, labels).
const INDICATOR_HEIGHT: u16 = 3;

/// Where everything goes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    /// The indicator's three-row band
    pub indicator: Rect,
    /// The bottom key-hint line
    pub hint: Rect,
}

impl PlayerLayout {
    /// The slider row - the mouse hit target. Zero-height when the
    /// terminal is too short to show a slider at all.
    pub fn slider_rect(&self) -> Rect {
        let height = if self.indicator.height >= 2 { 1 } else { 0 };
        Rect::new(
            self.indicator.x,
            self.indicator.y + 1,
            self.indicator.width,
            height,
        )
    }
}

/// Compute the frame layout: the indicator band vertically centered in
/// the space above a one-line key hint.
pub fn compute_layout(area: Rect) -> PlayerLayout {
    let hint_height = area.height.min(1);
    let hint = Rect::new(
        area.x,
        area.y + area.height - hint_height,
        area.width,
        hint_height,
    );

    let usable_height = area.height.saturating_sub(hint_height);
    let height = INDICATOR_HEIGHT.min(usable_height);
    let y = area.y + (usable_height - height) / 2;
    let width = area.width.saturating_sub(2 * H_MARGIN);
    let indicator = Rect::new(area.x + H_MARGIN, y, width, height);

    PlayerLayout { indicator, hint }
}

/// Draw one frame: the indicator plus the key-hint line.
pub fn draw(
    frame: &mut Frame,
    layout: &PlayerLayout,
    track: &Track,
    theme: &Theme,
    indicator: &mut IndicatorState,
    player: &PlayerState,
) {
    let widget = ProgressIndicator::new(theme)
        .title(&track.title)
        .artist(&track.artist)
        .max(track.duration);
    frame.render_stateful_widget(widget, layout.indicator, indicator);

    let hint = if player.paused {
        "space resume · ←/→ seek · q quit"
    } else {
        "space pause · ←/→ seek · q quit"
    };
    frame.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(theme.hint_style()),
        layout.hint,
    );
}
