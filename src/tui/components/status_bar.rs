//! Status bar with keybindings and the active theme.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};

/// Which listing actions are currently available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    pub load_more: bool,
    pub retry: bool,
}

#[derive(Default)]
pub struct StatusBar {
    actions: Actions,
}

impl Component for StatusBar {
    type Input = Actions;

    fn update(&mut self, input: Self::Input) {
        self.actions = input;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        const KEYBINDINGS: &[(&str, &str)] = &[
            ("?", "help"),
            ("1-3", "theme"),
            ("j/k", "scroll"),
            ("q", "quit"),
        ];

        let key_style = palette.accent;
        let separator = Span::styled(" │ ", palette.muted);
        let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
            let prefix = (i > 0).then(|| separator.clone());
            prefix.into_iter().chain([
                Span::styled(*key, key_style),
                Span::styled(format!(": {desc}"), palette.body),
            ])
        });

        let action_spans = [
            (self.actions.load_more, "m", "more"),
            (self.actions.retry, "r", "retry"),
        ]
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .flat_map(|(_, key, desc)| {
            [
                separator.clone(),
                Span::styled(key, key_style),
                Span::styled(format!(": {desc}"), palette.body),
            ]
        });

        let theme_label = format!(
            "{} · {}",
            palette.id,
            palette.descriptor.layout.kind.name()
        );
        let [keys_area, theme_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(theme_label.chars().count()).unwrap_or(0)),
        ])
        .areas(area);

        let bar = Style::new().bg(palette.secondary);
        let spans: Vec<Span> = keybind_spans.chain(action_spans).collect();
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), keys_area);
        frame.render_widget(
            Paragraph::new(Span::styled(theme_label, palette.muted)).style(bar),
            theme_area,
        );
    }
}
