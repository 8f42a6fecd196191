use ratatui::style::Color;

use crate::ops::cards::ACCENT_PALETTE;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    /// Card header accents, same order as the export palette.
    pub accents: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let accents = ACCENT_PALETTE
            .iter()
            .map(|hex| parse_hex_color(hex).unwrap_or(Color::Yellow))
            .collect();

        Theme {
            background: Color::Rgb(0x1A, 0x14, 0x0E),
            text: Color::Rgb(0xE8, 0xDC, 0xC8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x8A, 0x7E, 0x6A),
            highlight: Color::Rgb(0xFF, 0xB4, 0x54),
            selection_bg: Color::Rgb(0x3A, 0x2E, 0x1E),
            accents,
        }
    }
}

impl Theme {
    /// Accent color for a card's palette index.
    pub fn accent(&self, index: usize) -> Color {
        self.accents[index % self.accents.len()]
    }
}

/// Parse a hex color string like "#FFE4B5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
