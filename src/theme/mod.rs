//! Visual themes: the static registry, its persisted selection and the
//! manager that propagates changes to the presentation layer.
//!
//! - `registry`: `ThemeId` and the frozen `ThemeDescriptor` table
//! - `tokens`: conversion of CSS-like tokens to terminal units
//! - `store`: persistent key-value settings
//! - `manager`: current selection, persistence and observers

mod manager;
mod registry;
mod store;
mod tokens;

pub use manager::ThemeManager;
pub use registry::{lookup, LayoutKind, ThemeDescriptor, ThemeId};
#[cfg(test)]
pub use store::MemoryStore;
pub use store::{FileStore, SettingsStore};
pub use tokens::{font_modifier, Length, Rgb};
