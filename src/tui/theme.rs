//! Glyphs and colours for the two symbols, built from the resolved config.

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

use crate::core::board::Symbol;
use crate::core::config::{DEFAULT_O_COLOR, DEFAULT_X_COLOR, ResolvedConfig};

#[derive(Debug, Clone)]
pub struct Theme {
    pub x_glyph: String,
    pub o_glyph: String,
    pub x_color: Color,
    pub o_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_glyph: "X".to_string(),
            o_glyph: "O".to_string(),
            x_color: Color::Cyan,
            o_color: Color::Magenta,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            x_glyph: config.x_glyph.clone(),
            o_glyph: config.o_glyph.clone(),
            x_color: parse_color(&config.x_color, DEFAULT_X_COLOR),
            o_color: parse_color(&config.o_color, DEFAULT_O_COLOR),
        }
    }

    /// Text drawn inside a cell. Empty cells draw nothing.
    pub fn glyph(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x_glyph,
            Symbol::O => &self.o_glyph,
            Symbol::Empty => "",
        }
    }

    pub fn style(&self, symbol: Symbol) -> Style {
        match symbol {
            Symbol::X => Style::default().fg(self.x_color),
            Symbol::O => Style::default().fg(self.o_color),
            Symbol::Empty => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        }
    }

    /// Display width of the widest glyph, in terminal columns.
    pub fn glyph_width(&self) -> u16 {
        let width = self.x_glyph.width().max(self.o_glyph.width());
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

fn parse_color(value: &str, default: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("Unknown colour '{}', using '{}'", value, default);
        Color::from_str(default).unwrap_or(Color::Reset)
    })
}
