//! Owner of the active theme.
//!
//! The manager is the single source of truth for the selected `ThemeId`.
//! Every accepted change is written to the settings store and published on a
//! watch channel before `set_theme` returns, so all observers read the new
//! id on their next borrow.

use tokio::sync::watch;

use super::{
    registry::{lookup, ThemeDescriptor, ThemeId},
    store::SettingsStore,
};
use crate::error::InvalidThemeError;

/// Settings key the theme id is persisted under.
pub const THEME_KEY: &str = "theme";

pub struct ThemeManager<S> {
    store: S,
    current: ThemeId,
    publisher: watch::Sender<ThemeId>,
}

impl<S: SettingsStore> ThemeManager<S> {
    /// Restore the persisted theme, or the default when nothing usable is
    /// stored. Never fails.
    pub fn initialize(store: S) -> Self {
        let current = store.get(THEME_KEY).map_or_else(ThemeId::default, |saved| {
            saved.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; using {}", ThemeId::default());
                ThemeId::default()
            })
        });
        tracing::debug!("Initial theme: {current}");

        let (publisher, _) = watch::channel(current);
        Self {
            store,
            current,
            publisher,
        }
    }

    pub const fn theme(&self) -> ThemeId {
        self.current
    }

    pub const fn descriptor(&self) -> &'static ThemeDescriptor {
        lookup(self.current)
    }

    /// Make `id` the active theme, persist it and notify observers.
    ///
    /// A failed write is logged; the selection still applies to this run.
    pub fn set_theme(&mut self, id: ThemeId) {
        self.current = id;
        if let Err(e) = self.store.set(THEME_KEY, id.as_str()) {
            tracing::warn!("Could not persist theme {id}: {e}");
        }
        self.publisher.send_replace(id);
        tracing::info!("Theme set to {id} ({})", lookup(id).name);
    }

    /// Parse and apply a theme id. Unknown ids are rejected and leave both
    /// the active theme and the store untouched.
    pub fn set_theme_named(&mut self, name: &str) -> Result<ThemeId, InvalidThemeError> {
        let id = name.parse::<ThemeId>()?;
        self.set_theme(id);
        Ok(id)
    }

    /// Select the next registered theme.
    pub fn cycle_theme(&mut self) -> ThemeId {
        let next = self.current.next();
        self.set_theme(next);
        next
    }

    /// Observer handle that always reads the latest theme.
    pub fn subscribe(&self) -> watch::Receiver<ThemeId> {
        self.publisher.subscribe()
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }
}
