//! The progress indicator widget.
//!
//! Three rows: track title, a draggable slider, and a label row with the
//! elapsed time on the left, the artist centered, and the remaining time
//! (minus-prefixed) on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use crate::indicator::format::{format_clock, format_remaining};
use crate::indicator::state::IndicatorState;
use crate::theme::{SliderGlyphs, Theme};

/// Build the slider character row.
///
/// Positions below the fill point get the filled glyph, the fill point
/// itself gets the thumb, and the rest get the empty glyph. The fill
/// fraction is clamped to `[0, 1]` for drawing only; a zero `max` draws a
/// full bar.
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub(crate) fn build_slider(
    width: usize,
    position: f64,
    max: f64,
    glyphs: &SliderGlyphs,
) -> (Vec<char>, usize) {
    let progress = if max > 0.0 {
        (position / max).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (width as f64 * progress) as usize;

    let bar = (0..width)
        .map(|i| {
            if i < filled {
                glyphs.filled
            } else if i == filled {
                glyphs.thumb
            } else {
                glyphs.empty
            }
        })
        .collect();

    (bar, filled)
}

/// A progress slider with time labels for track playback position.
///
/// Renders from an [`IndicatorState`]: the owner syncs the authoritative
/// position into the state between frames, and user drags go through
/// [`IndicatorState::drag_to`]. The widget itself never clamps `max` or
/// the position; out-of-range values are the caller's contract violation.
#[derive(Debug)]
pub struct ProgressIndicator<'a> {
    title: &'a str,
    artist: &'a str,
    max: f64,
    theme: &'a Theme,
}

impl<'a> ProgressIndicator<'a> {
    /// Create an indicator with empty labels and a zero range.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            title: "",
            artist: "",
            max: 0.0,
            theme,
        }
    }

    /// Set the title shown above the slider.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the artist shown between the two time readouts.
    pub fn artist(mut self, artist: &'a str) -> Self {
        self.artist = artist;
        self
    }

    /// Set the upper bound of the position range, in seconds.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }
}

impl StatefulWidget for ProgressIndicator<'_> {
    type State = IndicatorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut IndicatorState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let theme = self.theme;
        let position = state.position();

        // Row 0: title
        buf.set_stringn(
            area.x,
            area.y,
            self.title,
            area.width as usize,
            theme.title_style(),
        );

        // Row 1: slider
        if area.height >= 2 {
            let (bar, filled) = build_slider(area.width as usize, position, self.max, &theme.glyphs);
            let y = area.y + 1;
            for (i, ch) in bar.iter().enumerate() {
                let style = if i < filled {
                    theme.slider_filled_style()
                } else if i == filled {
                    theme.slider_thumb_style()
                } else {
                    theme.slider_empty_style()
                };
                if let Some(cell) = buf.cell_mut((area.x + i as u16, y)) {
                    cell.set_char(*ch).set_style(style);
                }
            }
        }

        // Row 2: elapsed time, artist, remaining time
        if area.height >= 3 {
            let y = area.y + 2;
            let elapsed = format_clock(position);
            let remaining = format_remaining(position, self.max);
            let elapsed_w = elapsed.width() as u16;
            let remaining_w = remaining.width() as u16;

            buf.set_stringn(area.x, y, &elapsed, area.width as usize, theme.time_style());

            // One past the right edge until the remaining label lands
            let mut remaining_x = area.x + area.width;
            if remaining_w <= area.width {
                let x = area.x + area.width - remaining_w;
                if x >= area.x + elapsed_w {
                    buf.set_string(x, y, &remaining, theme.time_style());
                    remaining_x = x;
                }
            }

            let artist_w = self.artist.width() as u16;
            if artist_w > 0 && artist_w <= area.width {
                let x = area.x + (area.width - artist_w) / 2;
                // Centered, with at least one cell of air on each side
                if x > area.x + elapsed_w && x + artist_w < remaining_x {
                    buf.set_string(x, y, self.artist, theme.artist_style());
                }
            }
        }
    }
}
