//! Lifecycle of the product listing.
//!
//! ```text
//! Idle ──begin──▶ Loading ──ok──▶ Success(list)
//!                    │
//!                    └──err──▶ Failure(msg)
//! Success | Failure ──retry (begin)──▶ Loading
//! ```
//!
//! Fetch errors never leave the controller; the view always observes one of
//! the four states.

use super::{
    product::{parse_catalog, Product},
    source::ProductSource,
};
use crate::error::FetchError;

/// Products revealed per page.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success {
        products: Vec<Product>,
        /// Reveal count; the visible prefix is `min(revealed, len)` long.
        revealed: usize,
    },
    Failure(FetchError),
}

/// Proof that a fetch was started; completions carrying an outdated ticket
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct FetchController {
    state: FetchState,
    generation: u64,
    shut_down: bool,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Enter `Loading`, discarding any previous list or error.
    ///
    /// Returns `None` while a fetch is already in flight or after shutdown.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.shut_down {
            return None;
        }
        if self.is_loading() {
            tracing::debug!("Fetch already in flight; ignoring");
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Loading;
        tracing::debug!("Fetch {} started", self.generation);
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the fetch started with `ticket`.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Vec<Product>, FetchError>) {
        if self.shut_down || ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!("Dropping stale fetch {}", ticket.generation);
            return;
        }
        self.state = match outcome {
            Ok(products) => {
                tracing::info!("Fetched {} products", products.len());
                FetchState::Success {
                    products,
                    revealed: PAGE_SIZE,
                }
            }
            Err(e) => {
                tracing::error!("{e}: {}", e.detail());
                FetchState::Failure(e)
            }
        };
    }

    /// Run one fetch against `source` to completion.
    pub fn fetch_products(&mut self, source: &impl ProductSource) {
        let Some(ticket) = self.begin_fetch() else {
            return;
        };
        let outcome = source.fetch().and_then(|body| parse_catalog(&body));
        self.complete(ticket, outcome);
    }

    /// Reveal the next page. Returns whether more products became visible.
    pub fn reveal_more(&mut self) -> bool {
        let FetchState::Success { products, revealed } = &mut self.state else {
            return false;
        };
        let next = (*revealed + PAGE_SIZE).min(products.len());
        if next <= *revealed {
            return false;
        }
        *revealed = next;
        true
    }

    pub fn visible_products(&self) -> &[Product] {
        match &self.state {
            FetchState::Success { products, revealed } => {
                &products[..(*revealed).min(products.len())]
            }
            _ => &[],
        }
    }

    /// Total number of fetched products, revealed or not.
    pub fn total(&self) -> usize {
        match &self.state {
            FetchState::Success { products, .. } => products.len(),
            _ => 0,
        }
    }

    pub fn has_more(&self) -> bool {
        self.visible_products().len() < self.total()
    }

    /// Tear down: any fetch still in flight is ignored when it lands.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
    }
}
