//! Theme tokens for the indicator and player chrome.
//!
//! Centralizes all color and glyph definitions for easy customization.
//! Token values pass through unchanged from configuration to rendering;
//! there is no behavior here beyond mapping names to values.

use ratatui::style::{Color, Modifier, Style};

/// Characters used to draw the slider row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderGlyphs {
    /// Glyph for the played part of the track
    pub filled: char,
    /// Glyph for the unplayed part
    pub empty: char,
    /// Glyph for the playhead
    pub thumb: char,
}

impl Default for SliderGlyphs {
    fn default() -> Self {
        Self {
            filled: '━',
            empty: '─',
            thumb: '⏺',
        }
    }
}

/// Theme for the progress indicator.
///
/// All colors and glyphs are defined here for easy customization.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Color for the time readouts
    pub text_primary: Color,
    /// Dimmed color for the artist line and key hints
    pub text_secondary: Color,
    /// Accent color for the track title
    pub accent: Color,
    /// Color of the played part of the slider
    pub slider_filled: Color,
    /// Color of the unplayed part of the slider
    pub slider_empty: Color,
    /// Color of the playhead
    pub slider_thumb: Color,
    /// Slider glyph set
    pub glyphs: SliderGlyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self::charcoal()
    }
}

impl Theme {
    /// Default theme - gray text with a green slider, standard ANSI
    /// colors for consistent terminal rendering.
    pub fn charcoal() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            slider_filled: Color::Green,
            slider_empty: Color::DarkGray,
            slider_thumb: Color::White,
            glyphs: SliderGlyphs::default(),
        }
    }

    /// Classic terminal theme - white text, yellow slider.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            slider_filled: Color::Yellow,
            slider_empty: Color::DarkGray,
            slider_thumb: Color::White,
            glyphs: SliderGlyphs::default(),
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            slider_filled: Color::Cyan,
            slider_empty: Color::DarkGray,
            slider_thumb: Color::White,
            glyphs: SliderGlyphs::default(),
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "charcoal" => Some(Self::charcoal()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for the track title.
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the time readouts.
    pub fn time_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for the artist line.
    pub fn artist_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the bottom key-hint line.
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the played part of the slider.
    pub fn slider_filled_style(&self) -> Style {
        Style::default().fg(self.slider_filled)
    }

    /// Style for the unplayed part of the slider.
    pub fn slider_empty_style(&self) -> Style {
        Style::default().fg(self.slider_empty)
    }

    /// Style for the playhead.
    pub fn slider_thumb_style(&self) -> Style {
        Style::default().fg(self.slider_thumb)
    }
}
