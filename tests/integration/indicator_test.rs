//! End-to-end scenario for the progress indicator.
//!
//! max=180, "Song A" / "Artist B": initial render, a user drag to 90,
//! then an external tick to 95, checked on the rendered buffer.

use nowbar::indicator::{ChangeListener, IndicatorState, ProgressIndicator};
use nowbar::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

const WIDTH: u16 = 30;

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf.cell((x, y)).unwrap().symbol())
        .collect()
}

fn render(state: &mut IndicatorState, theme: &Theme) -> Buffer {
    let area = Rect::new(0, 0, WIDTH, 3);
    let mut buf = Buffer::empty(area);
    ProgressIndicator::new(theme)
        .title("Song A")
        .artist("Artist B")
        .max(180.0)
        .render(area, &mut buf, state);
    buf
}

struct Recorder {
    calls: Vec<f64>,
}

impl ChangeListener for Recorder {
    fn on_change(&mut self, position: f64) {
        self.calls.push(position);
    }
}

#[test]
fn drag_then_external_tick() {
    let theme = Theme::default();
    let mut state = IndicatorState::new(0.0);
    let mut recorder = Recorder { calls: Vec::new() };

    // Initial render: elapsed 00:00, remaining -03:00
    let buf = render(&mut state, &theme);
    assert_eq!(row(&buf, 0), format!("Song A{}", " ".repeat(24)));
    assert_eq!(row(&buf, 1), format!("⏺{}", "─".repeat(29)));
    assert_eq!(row(&buf, 2), "00:00      Artist B     -03:00");

    // User drags to 90: display updates immediately, the listener fires
    // exactly once with 90
    state.drag_to(90.0, &mut recorder);
    let buf = render(&mut state, &theme);
    assert_eq!(row(&buf, 1), format!("{}⏺{}", "━".repeat(15), "─".repeat(14)));
    assert_eq!(row(&buf, 2), "01:30      Artist B     -01:30");
    assert_eq!(recorder.calls, vec![90.0]);

    // The owner pushes 95: external truth wins without interaction
    state.sync(95.0);
    let buf = render(&mut state, &theme);
    assert_eq!(row(&buf, 2), "01:35      Artist B     -01:25");
    assert_eq!(recorder.calls, vec![90.0]);
}

#[test]
fn external_ticks_alone_move_the_labels() {
    let theme = Theme::default();
    let mut state = IndicatorState::new(0.0);

    for (value, elapsed) in [(1.0, "00:01"), (59.0, "00:59"), (60.0, "01:00")] {
        state.sync(value);
        let buf = render(&mut state, &theme);
        assert!(row(&buf, 2).starts_with(elapsed));
    }
}

#[test]
fn custom_glyphs_flow_through_to_the_buffer() {
    let mut theme = Theme::default();
    theme.glyphs.filled = '#';
    theme.glyphs.empty = '.';
    theme.glyphs.thumb = 'o';

    let mut state = IndicatorState::new(90.0);
    let buf = render(&mut state, &theme);
    assert_eq!(row(&buf, 1), format!("{}o{}", "#".repeat(15), ".".repeat(14)));
}
