//! Interactive player loop.
//!
//! Owns the terminal session: raw mode, alternate screen, mouse capture.
//! Every turn syncs the authoritative clock into the indicator (the
//! periodic external update), draws when something visible changed, and
//! handles at most one input event.

pub mod input;
mod state;
pub mod ui;

pub use state::{InputResult, PlayerState};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::indicator::IndicatorState;
use crate::theme::Theme;
use crate::track::Track;

/// How long to wait for input before the next clock tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Run the player until the user quits.
pub fn run(track: &Track, theme: &Theme, start_at: f64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, track, theme, start_at);

    // Restore the terminal even when the loop errored
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    track: &Track,
    theme: &Theme,
    start_at: f64,
) -> Result<()> {
    let mut player = PlayerState::new(track.duration, start_at);
    let mut indicator = IndicatorState::new(player.position());
    let mut last_drawn_secs = u64::MAX;

    loop {
        let position = player.position();
        indicator.sync(position);

        // Hold at the end of the track instead of exiting
        if player.finished() && !player.paused {
            player.toggle_pause();
        }

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::compute_layout(area);

        let whole_secs = position as u64;
        if player.needs_render || whole_secs != last_drawn_secs {
            terminal.draw(|frame| ui::draw(frame, &layout, track, theme, &mut indicator, &player))?;
            player.needs_render = false;
            last_drawn_secs = whole_secs;
        }

        if event::poll(TICK_INTERVAL)? {
            match input::handle_event(event::read()?, &layout, &mut indicator, &mut player) {
                InputResult::Quit => break,
                InputResult::Continue => {}
            }
        }
    }

    Ok(())
}
