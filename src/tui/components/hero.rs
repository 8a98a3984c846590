use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{header::APP_NAME, Component, Palette};

const SUBTITLE: &str = "Switch between three distinct themes and watch the whole interface \
                        change its colors, typography, layout and spacing.";

/// Welcome banner above the listing.
#[derive(Default)]
pub struct Hero;

impl Hero {
    pub const HEIGHT: u16 = 3;
}

impl Component for Hero {
    type Input = ();

    fn update(&mut self, (): Self::Input) {}

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let lines = vec![
            Line::styled(format!("Welcome to {APP_NAME}"), palette.heading),
            Line::styled(SUBTITLE, palette.muted),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
