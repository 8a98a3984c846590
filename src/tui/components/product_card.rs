//! A single product rendered as a bordered card.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::Palette;
use crate::catalog::Product;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 9;

const BADGE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Rgb(0xff, 0x47, 0x57))
    .add_modifier(Modifier::BOLD);

pub fn render_card(frame: &mut Frame, area: Rect, product: &Product, palette: &Palette) {
    let mut block = Block::bordered()
        .border_type(palette.border_type)
        .border_style(palette.border)
        .style(palette.surface)
        .title(Line::styled(format!(" {} ", product.title), palette.heading));
    if let Some(badge) = product.discount_badge() {
        block = block.title_top(Line::styled(format!(" {badge} "), BADGE).right_aligned());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![
        Line::styled(product.label(), palette.muted),
        Line::styled(format!("image: {}", product.image), palette.muted),
    ];
    let details: Vec<&str> = [product.model.as_deref(), product.color.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        lines.push(Line::styled(details.join(" · "), palette.muted));
    }
    lines.push(Line::styled(product.description.as_str(), palette.body));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        text_area,
    );

    let price = product.price_text();
    let [rating_area, price_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(price.len()).unwrap_or(0)),
    ])
    .areas(footer_area);

    if let Some(rating) = &product.rating {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(rating.stars(), palette.accent),
                Span::styled(format!(" ({} reviews)", rating.count), palette.muted),
            ])),
            rating_area,
        );
    }
    frame.render_widget(
        Paragraph::new(Span::styled(price, palette.price())),
        price_area,
    );
}
