// crates/vermak-core/src/error.rs
use thiserror::Error;

/// Errors raised by the controller and its configuration layer.
///
/// Provider failures (a search that came back `ZERO_RESULTS`, a details fetch
/// that was denied) are not errors: they are reported as outcomes so the
/// controller always returns to an idle state.
#[derive(Debug, Error)]
pub enum VermakError {
    /// A country selector value with no configured profile.
    #[error("no country profile configured for code '{0}'")]
    UnknownCountry(String),

    #[error("no search result at index {index} (current result set has {len})")]
    NoSuchResult { index: usize, len: usize },

    /// The map has not reported its visible region yet.
    #[error("map bounds are not available yet")]
    BoundsUnavailable,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VermakError>;
