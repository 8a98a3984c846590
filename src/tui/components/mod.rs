//! Component-based UI architecture.
//!
//! Each component owns its own view state, handles the events it cares about
//! and renders with the `Palette` resolved for the current frame.

mod header;
mod help_menu;
mod hero;
mod navigation;
mod palette;
mod product_card;
mod product_list;
mod status_bar;

use crossterm::event::Event;
pub use header::Header;
pub use help_menu::HelpMenu;
pub use hero::Hero;
pub use navigation::Navigation;
pub use palette::Palette;
pub use product_list::{Listing, ProductList};
use ratatui::{layout::Rect, Frame};
pub use status_bar::{Actions, StatusBar};

/// A UI component with co-located state, rendering, and event handling.
pub trait Component {
    /// Data the component displays, pushed in by the app.
    type Input;

    fn update(&mut self, input: Self::Input);

    /// Handle a terminal event. Returns true if the event was consumed.
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette);
}
