// crates/vermak-core/src/lib.rs
//! vermak-core: a headless map-search controller.
//!
//! The user picks a place from autocomplete. The controller zooms in on it,
//! runs a category/keyword nearby search over the visible region, drops a
//! lettered marker per result next to a striped results list, and fills an
//! info panel when a marker or row is clicked. All provider and DOM access
//! goes through the traits in [`traits`].

pub mod config;
pub mod controller;
pub mod details;
pub mod error;
pub mod geo;
#[cfg(feature = "json")]
pub mod loader;
pub mod place;
pub mod prelude;
pub mod render;
pub mod session;
pub mod traits;

// Re-exports
pub use crate::config::{ControllerConfig, CountryProfile};
pub use crate::controller::{DetailsOutcome, MapSearchController, PlaceOutcome, SearchOutcome};
pub use crate::error::{Result, VermakError};
pub use crate::session::SearchSession;
