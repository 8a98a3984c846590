use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};

const NAV_ITEMS: &[&str] = &["Home", "About", "Contact"];

/// Navigation bar; only the home page exists, so it is always active.
#[derive(Default)]
pub struct Navigation;

impl Component for Navigation {
    type Input = ();

    fn update(&mut self, (): Self::Input) {}

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let gap = " ".repeat(usize::from(palette.gap.max(1)));
        let spans: Vec<Span> = NAV_ITEMS
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                let style = if i == 0 {
                    palette.accent.add_modifier(Modifier::UNDERLINED)
                } else {
                    palette.body
                };
                let prefix = (i > 0).then(|| Span::raw(gap.clone()));
                prefix.into_iter().chain([Span::styled(*item, style)])
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
