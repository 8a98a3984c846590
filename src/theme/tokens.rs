//! Conversion of CSS-like theme tokens to terminal units.

use std::ops::Range;

use ratatui::style::{Color, Modifier};

/// A `#rrggbb` color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn parse(token: &str) -> Option<Self> {
        let hex = token.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Terminal color for a token, falling back to the terminal default.
    pub fn color(token: &str) -> Color {
        Self::parse(token).map_or(Color::Reset, Color::from)
    }
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Self::Rgb(r, g, b)
    }
}

/// A `rem` or `px` length token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Rem(f32),
    Px(f32),
}

impl Length {
    /// Terminal cells per `rem`.
    const CELLS_PER_REM: f32 = 2.0;
    /// Pixels per terminal column.
    const PX_PER_CELL: f32 = 10.0;

    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(value) = token.strip_suffix("rem") {
            return value.parse::<f32>().ok().filter(|v| *v >= 0.0).map(Self::Rem);
        }
        token
            .strip_suffix("px")?
            .parse::<f32>()
            .ok()
            .filter(|v| *v >= 0.0)
            .map(Self::Px)
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn cells(self) -> u16 {
        let cells = match self {
            Self::Rem(rem) => rem * Self::CELLS_PER_REM,
            Self::Px(px) => px / Self::PX_PER_CELL,
        };
        cells.round().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    /// Cells for a token; unparsable tokens count as zero.
    pub fn cells_of(token: &str) -> u16 {
        Self::parse(token).map_or(0, Self::cells)
    }
}

/// Text emphasis standing in for a font family, chosen by its generic family.
pub fn font_modifier(family: &str) -> Modifier {
    let generic = family.rsplit(',').next().unwrap_or(family).trim();
    match generic {
        "sans-serif" => Modifier::BOLD,
        "serif" => Modifier::ITALIC,
        "cursive" => Modifier::BOLD | Modifier::ITALIC,
        _ => Modifier::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::parse("#2c3e50"), Some(Rgb(0x2c, 0x3e, 0x50)));
        assert_eq!(Rgb::parse("2c3e50"), None);
        assert_eq!(Rgb::parse("#2c3e5"), None);
        assert_eq!(Rgb::parse("#zzzzzz"), None);
        assert_eq!(Rgb::color("nope"), Color::Reset);
    }

    #[test]
    fn converts_lengths_to_cells() {
        assert_eq!(Length::parse("0.75rem"), Some(Length::Rem(0.75)));
        assert_eq!(Length::cells_of("0.25rem"), 1);
        assert_eq!(Length::cells_of("1rem"), 2);
        assert_eq!(Length::cells_of("6rem"), 12);
        assert_eq!(Length::cells_of("1200px"), 120);
        assert_eq!(Length::cells_of("8px"), 1);
        assert_eq!(Length::parse("12em"), None);
        assert_eq!(Length::parse("-1rem"), None);
    }

    #[test]
    fn maps_generic_font_families() {
        assert_eq!(
            font_modifier("'Poppins', -apple-system, Roboto, sans-serif"),
            Modifier::BOLD
        );
        assert_eq!(font_modifier("'Merriweather', Georgia, serif"), Modifier::ITALIC);
        assert_eq!(
            font_modifier("'Fredoka One', cursive"),
            Modifier::BOLD | Modifier::ITALIC
        );
        assert_eq!(font_modifier("monospace"), Modifier::empty());
    }
}
