//! Product catalog: the remote source, response decoding and the fetch
//! controller that owns the listing state.

mod controller;
mod product;
mod source;

pub use controller::{FetchController, FetchState, FetchTicket};
pub use product::{parse_catalog, Product};
pub use source::{HttpSource, ProductSource, DEFAULT_ENDPOINT};
