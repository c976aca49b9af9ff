//! Frame-level tests for the player chrome using a test backend.

use nowbar::indicator::IndicatorState;
use nowbar::player::ui::{compute_layout, draw};
use nowbar::player::PlayerState;
use nowbar::theme::Theme;
use nowbar::track::Track;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf.cell((x, y)).unwrap().symbol())
        .collect()
}

fn draw_frame(width: u16, height: u16, player: &PlayerState, state: &mut IndicatorState) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let track = Track::new("Song A".into(), "Artist B".into(), 180.0).unwrap();
    let theme = Theme::default();
    let layout = compute_layout(Rect::new(0, 0, width, height));

    terminal
        .draw(|frame| draw(frame, &layout, &track, &theme, state, player))
        .unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn frame_places_the_indicator_in_the_centered_band() {
    let player = PlayerState::new(180.0, 0.0);
    let mut state = IndicatorState::new(0.0);
    let buf = draw_frame(30, 10, &player, &mut state);

    // Layout for 30x10: indicator band at rows 3..6, x 2..28
    assert_eq!(row(&buf, 3), format!("  Song A{}", " ".repeat(22)));
    assert_eq!(row(&buf, 4), format!("  ⏺{}{}", "─".repeat(25), "  "));
    assert_eq!(row(&buf, 5), "  00:00    Artist B   -03:00  ");
}

#[test]
fn hint_line_tracks_the_pause_state() {
    let mut player = PlayerState::new(180.0, 0.0);
    let mut state = IndicatorState::new(0.0);

    let buf = draw_frame(60, 10, &player, &mut state);
    assert!(row(&buf, 9).contains("space pause"));

    player.toggle_pause();
    let buf = draw_frame(60, 10, &player, &mut state);
    assert!(row(&buf, 9).contains("space resume"));
}
