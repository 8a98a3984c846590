//! Header component with the app name and the theme selector.

use std::iter;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};
use crate::theme::{lookup, ThemeId};

pub const APP_NAME: &str = "Hipster Theme App";

/// Header showing the app name and every theme, the active one highlighted.
#[derive(Default)]
pub struct Header {
    active: ThemeId,
}

/// Selector entry for one theme, e.g. `Theme 1 - Minimalist`.
pub fn selector_label(id: ThemeId) -> String {
    format!("Theme {} - {}", id.number(), lookup(id).name)
}

impl Component for Header {
    type Input = ThemeId;

    fn update(&mut self, input: Self::Input) {
        self.active = input;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let selector: Vec<Span> = ThemeId::ALL
            .into_iter()
            .flat_map(|id| {
                let style = if id == self.active {
                    palette.selected()
                } else {
                    palette.muted
                };
                [
                    Span::raw(" "),
                    Span::styled(format!(" {} ", selector_label(id)), style),
                ]
            })
            .collect();

        let selector_width = selector.iter().map(Span::width).sum::<usize>() + "Theme:".len();
        let [logo_area, selector_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(selector_width).unwrap_or(u16::MAX)),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(APP_NAME, palette.heading.fg(palette.primary))),
            logo_area,
        );

        let line = Line::from(
            iter::once(Span::styled("Theme:", palette.muted))
                .chain(selector)
                .collect::<Vec<_>>(),
        );
        frame.render_widget(Paragraph::new(line), selector_area);
    }
}
