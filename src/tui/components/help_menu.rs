//! HelpMenu component - overlay showing keyboard shortcuts.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{Component, Palette};

const KEYBINDINGS: &[(&str, &str)] = &[
    // Themes
    ("1/2/3", "select theme"),
    ("t", "next theme"),
    // Listing
    ("j/k", "scroll"),
    ("m", "load more products"),
    ("r", "try again / reload"),
    // Other
    ("?", "close help"),
    ("q", "quit"),
];

/// Help menu popup showing keyboard shortcuts.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Component for HelpMenu {
    type Input = ();

    fn update(&mut self, (): Self::Input) {}

    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }

        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let width = 32u16.min(area.width);
        #[allow(clippy::cast_possible_truncation)]
        let height = ((KEYBINDINGS.len() as u16) + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 2);
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_type(palette.border_type)
            .border_style(palette.accent)
            .style(palette.surface);

        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>6}"), palette.accent),
                    Span::styled(format!("  {desc}"), palette.body),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
