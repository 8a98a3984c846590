//! Terminal styles resolved from the active theme descriptor.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use crate::theme::{font_modifier, lookup, Length, Rgb, ThemeDescriptor, ThemeId};

/// Every style a frame needs, resolved once per frame from one descriptor so
/// that all components draw with the same theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub id: ThemeId,
    pub descriptor: &'static ThemeDescriptor,
    pub base: Style,
    pub surface: Style,
    pub heading: Style,
    pub body: Style,
    pub muted: Style,
    pub accent: Style,
    pub primary: Color,
    pub secondary: Color,
    pub border: Style,
    pub border_type: BorderType,
    pub padding: u16,
    pub gap: u16,
    pub section_gap: u16,
    pub max_width: u16,
}

impl Palette {
    pub fn new(id: ThemeId) -> Self {
        let descriptor = lookup(id);
        let colors = descriptor.colors;
        let background = Rgb::color(colors.background);
        let surface = Rgb::color(colors.surface);
        let text = Rgb::color(colors.text);
        let [small, medium, large, _] = descriptor.spacing.scale().map(Length::cells_of);
        let rounded = matches!(
            Length::parse(descriptor.layout.border_radius),
            Some(Length::Px(px)) if px > 8.0
        );

        Self {
            id,
            descriptor,
            base: Style::new().fg(text).bg(background),
            surface: Style::new().fg(text).bg(surface),
            heading: Style::new()
                .fg(text)
                .add_modifier(font_modifier(descriptor.fonts.primary)),
            body: Style::new()
                .fg(text)
                .add_modifier(font_modifier(descriptor.fonts.secondary)),
            muted: Style::new().fg(Rgb::color(colors.text_secondary)),
            accent: Style::new().fg(Rgb::color(colors.accent)),
            primary: Rgb::color(colors.primary),
            secondary: Rgb::color(colors.secondary),
            border: Style::new().fg(Rgb::color(colors.border)),
            border_type: if rounded {
                BorderType::Rounded
            } else {
                BorderType::Plain
            },
            padding: small,
            gap: medium,
            section_gap: (large / 4).clamp(1, 2),
            max_width: Length::cells_of(descriptor.layout.max_width),
        }
    }

    /// Highlight for the selected entry of a list or selector.
    pub fn selected(&self) -> Style {
        self.accent.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub fn price(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }
}
