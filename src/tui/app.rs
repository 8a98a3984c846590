//! Application state for the TUI.

use std::mem;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    widgets::Block,
    Frame,
};

use super::components::{
    Actions, Component, Header, HelpMenu, Hero, Listing, Navigation, Palette, ProductList,
    StatusBar,
};
use crate::{
    catalog::{FetchController, FetchState, FetchTicket, Product},
    error::FetchError,
    theme::{SettingsStore, ThemeId, ThemeManager},
};

/// Application state.
pub struct App<S> {
    /// Active theme, persisted on change.
    pub theme: ThemeManager<S>,
    catalog: FetchController,
    /// Fetches started but not yet handed to the runtime.
    pending_fetches: Vec<FetchTicket>,
    header: Header,
    navigation: Navigation,
    hero: Hero,
    products: ProductList,
    status_bar: StatusBar,
    help_menu: HelpMenu,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl<S: SettingsStore> App<S> {
    pub fn new(theme: ThemeManager<S>) -> Self {
        Self {
            theme,
            catalog: FetchController::new(),
            pending_fetches: Vec::new(),
            header: Header::default(),
            navigation: Navigation,
            hero: Hero,
            products: ProductList::default(),
            status_bar: StatusBar::default(),
            help_menu: HelpMenu::default(),
            should_exit: false,
        }
    }

    /// Start a fetch unless one is already in flight.
    pub fn start_fetch(&mut self) {
        if let Some(ticket) = self.catalog.begin_fetch() {
            self.pending_fetches.push(ticket);
        }
        self.sync_listing();
    }

    /// Take the fetches the runtime still has to perform.
    pub fn take_fetch_requests(&mut self) -> Vec<FetchTicket> {
        mem::take(&mut self.pending_fetches)
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Product>, FetchError>,
    ) {
        self.catalog.complete(ticket, outcome);
        self.sync_listing();
    }

    /// Stop accepting fetch results; called when the view is torn down.
    pub fn shutdown(&mut self) {
        self.catalog.shutdown();
    }

    pub const fn tick(&mut self) {
        self.products.tick();
    }

    fn sync_listing(&mut self) {
        self.products.update(Listing::from_controller(&self.catalog));
        self.status_bar.update(Actions {
            load_more: self.catalog.has_more(),
            retry: matches!(self.catalog.state(), FetchState::Failure(_)),
        });
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if self.help_menu.handle_event(event) || self.products.handle_event(event) {
            return;
        }

        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('?') => self.help_menu.toggle(),
            KeyCode::Char('t') => {
                self.theme.cycle_theme();
            }
            KeyCode::Char('1') => self.theme.set_theme(ThemeId::Theme1),
            KeyCode::Char('2') => self.theme.set_theme(ThemeId::Theme2),
            KeyCode::Char('3') => self.theme.set_theme(ThemeId::Theme3),
            KeyCode::Char('m') => {
                if self.catalog.reveal_more() {
                    self.sync_listing();
                }
            }
            KeyCode::Char('r') => self.start_fetch(),
            _ => {}
        }
    }

    /// Draw one frame. The theme is read once so every component renders
    /// with the same palette.
    pub fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::new(self.theme.theme());
        self.header.update(palette.id);

        let area = frame.area();
        frame.render_widget(Block::new().style(palette.base), area);

        let [body_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let content = centered(body_area, palette.max_width).inner(Margin::new(palette.padding, 0));
        let [header_area, nav_area, hero_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(Hero::HEIGHT),
            Constraint::Min(0),
        ])
        .spacing(palette.section_gap)
        .areas(content);

        self.header.render(frame, header_area, &palette);
        self.navigation.render(frame, nav_area, &palette);
        self.hero.render(frame, hero_area, &palette);
        self.products.render(frame, list_area, &palette);
        self.status_bar.render(frame, status_area, &palette);
        self.help_menu.render(frame, area, &palette);
    }
}

/// Horizontally centered slice of `area`, at most `max_width` wide.
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
