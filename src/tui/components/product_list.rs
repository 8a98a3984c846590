//! Product listing: loading, error and product views, arranged by the
//! active theme's layout.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{
    product_card::{render_card, CARD_HEIGHT},
    Component, Palette,
};
use crate::{
    catalog::{FetchController, FetchState, Product},
    theme::LayoutKind,
};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SIDEBAR_WIDTH: u16 = 24;
const MIN_CARD_WIDTH: u16 = 40;

/// Snapshot of the fetch controller taken for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Listing {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready {
        visible: Vec<Product>,
        total: usize,
    },
}

impl Listing {
    pub fn from_controller(controller: &FetchController) -> Self {
        match controller.state() {
            FetchState::Idle => Self::Idle,
            FetchState::Loading => Self::Loading,
            FetchState::Failure(e) => Self::Failed(e.to_string()),
            FetchState::Success { .. } => Self::Ready {
                visible: controller.visible_products().to_vec(),
                total: controller.total(),
            },
        }
    }

    fn has_more(&self) -> bool {
        matches!(self, Self::Ready { visible, total } if visible.len() < *total)
    }
}

#[derive(Default)]
pub struct ProductList {
    listing: Listing,
    /// First card row shown.
    scroll: usize,
    tick: usize,
}

impl ProductList {
    pub const fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let lines = match &self.listing {
            Listing::Failed(message) => vec![
                Line::styled(message.as_str(), palette.body),
                Line::default(),
                Line::styled(" Try Again (r) ", palette.selected()),
            ],
            _ => vec![Line::styled(
                format!("{} Loading products...", SPINNER[self.tick % SPINNER.len()]),
                palette.muted,
            )],
        };
        let height = u16::try_from(lines.len()).unwrap_or(0);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }

    fn render_products(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let Listing::Ready { visible, total } = &self.listing else {
            return;
        };
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No products available.", palette.muted))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }

        let [cards_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let footer = if self.listing.has_more() {
            Line::styled(" Load More Products (m) ", palette.selected())
        } else {
            Line::styled(
                format!("Showing {} of {total} products", visible.len()),
                palette.muted,
            )
        };
        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            footer_area,
        );

        let visible = visible.clone();
        match palette.descriptor.layout.kind {
            LayoutKind::Minimalist => self.render_cards(frame, cards_area, &visible, 1, palette),
            LayoutKind::Sidebar => {
                let [sidebar_area, main_area] = Layout::horizontal([
                    Constraint::Length(SIDEBAR_WIDTH),
                    Constraint::Min(0),
                ])
                .spacing(palette.gap)
                .areas(cards_area);
                render_categories(frame, sidebar_area, &visible, palette);
                self.render_cards(frame, main_area, &visible, 1, palette);
            }
            LayoutKind::CardGrid => {
                let columns = usize::from((cards_area.width / MIN_CARD_WIDTH).clamp(1, 3));
                self.render_cards(frame, cards_area, &visible, columns, palette);
            }
        }
    }

    fn render_cards(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        products: &[Product],
        columns: usize,
        palette: &Palette,
    ) {
        let row_gap = u16::from(palette.padding > 0);
        let row_height = CARD_HEIGHT + row_gap;
        let rows = products.len().div_ceil(columns);
        let visible_rows = usize::from((area.height / row_height).max(1));
        self.scroll = self.scroll.min(rows.saturating_sub(visible_rows));

        let row_constraints = vec![Constraint::Fill(1); columns];
        for (slot, row) in products
            .chunks(columns)
            .skip(self.scroll)
            .take(visible_rows)
            .enumerate()
        {
            let y = area.y + slot as u16 * row_height;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::horizontal(row_constraints.clone())
                .spacing(palette.gap)
                .split(row_area);
            for (product, cell) in row.iter().zip(cells.iter()) {
                render_card(frame, *cell, product, palette);
            }
        }
    }
}

fn render_categories(frame: &mut Frame, area: Rect, products: &[Product], palette: &Palette) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_default() += 1;
    }
    let lines: Vec<Line> = counts
        .into_iter()
        .map(|(category, count)| {
            Line::from(vec![
                Span::styled(category, palette.body),
                Span::styled(format!(" ({count})"), palette.muted),
            ])
        })
        .collect();

    let block = Block::bordered()
        .title(Line::styled(" Categories ", palette.heading))
        .border_type(palette.border_type)
        .border_style(palette.border)
        .style(palette.surface);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

impl Component for ProductList {
    type Input = Listing;

    fn update(&mut self, input: Self::Input) {
        if !matches!(input, Listing::Ready { .. }) {
            self.scroll = 0;
        }
        self.listing = input;
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            _ => return false,
        }
        true
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(Span::styled("Featured Products", palette.heading))
                .alignment(Alignment::Center),
            title_area,
        );

        match self.listing {
            Listing::Ready { .. } => self.render_products(frame, body_area, palette),
            _ => self.render_status(frame, body_area, palette),
        }
    }
}
