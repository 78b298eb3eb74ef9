// crates/vermak-core/src/place.rs
//! Records exchanged with the places provider.
//!
//! Field names follow the provider's JSON (`place_id`, `vicinity`,
//! `formatted_phone_number`, ...). Everything except the identifier is
//! optional, since the provider omits fields it has no data for.
use crate::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported with every provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacesStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    NotFound,
    UnknownError,
    /// Any status this crate does not know about.
    #[serde(other)]
    Other,
}

impl PlacesStatus {
    pub fn is_ok(self) -> bool {
        self == PlacesStatus::Ok
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlacesStatus::Ok => "OK",
            PlacesStatus::ZeroResults => "ZERO_RESULTS",
            PlacesStatus::InvalidRequest => "INVALID_REQUEST",
            PlacesStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            PlacesStatus::RequestDenied => "REQUEST_DENIED",
            PlacesStatus::NotFound => "NOT_FOUND",
            PlacesStatus::UnknownError => "UNKNOWN_ERROR",
            PlacesStatus::Other => "OTHER",
        }
    }

    /// Parses a provider status string; unknown values map to [`PlacesStatus::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "OK" => PlacesStatus::Ok,
            "ZERO_RESULTS" => PlacesStatus::ZeroResults,
            "INVALID_REQUEST" => PlacesStatus::InvalidRequest,
            "OVER_QUERY_LIMIT" => PlacesStatus::OverQueryLimit,
            "REQUEST_DENIED" => PlacesStatus::RequestDenied,
            "NOT_FOUND" => PlacesStatus::NotFound,
            "UNKNOWN_ERROR" => PlacesStatus::UnknownError,
            _ => PlacesStatus::Other,
        }
    }
}

impl fmt::Display for PlacesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

/// One place returned by a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl SearchResult {
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

/// The richer record fetched when a marker or row is clicked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Provider info page for the place.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
}

/// The suggestion currently held by the autocomplete input. `geometry` is
/// missing when the user pressed Enter without picking a suggestion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceSelection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl PlaceSelection {
    pub fn at(name: &str, location: LatLng) -> Self {
        Self {
            name: Some(name.to_string()),
            geometry: Some(Geometry {
                location: Some(location),
            }),
        }
    }

    pub fn unresolved(text: &str) -> Self {
        Self {
            name: Some(text.to_string()),
            geometry: None,
        }
    }

    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    pub status: PlacesStatus,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl NearbySearchResponse {
    pub fn ok(results: Vec<SearchResult>) -> Self {
        Self {
            status: PlacesStatus::Ok,
            results,
        }
    }

    pub fn failed(status: PlacesStatus) -> Self {
        Self {
            status,
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: PlacesStatus,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

impl PlaceDetailsResponse {
    pub fn ok(details: PlaceDetails) -> Self {
        Self {
            status: PlacesStatus::Ok,
            result: Some(details),
        }
    }

    pub fn failed(status: PlacesStatus) -> Self {
        Self {
            status,
            result: None,
        }
    }
}

/// Monotonically increasing tag attached to every nearby search. Responses
/// carrying an older tag than the controller's current one are stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchGeneration(pub u64);

impl SearchGeneration {
    pub fn next(self) -> Self {
        SearchGeneration(self.0 + 1)
    }
}

impl fmt::Display for SearchGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A nearby search as sent to the provider. Serializes to the provider's
/// request literal; the generation stays on this side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySearchRequest {
    #[serde(skip)]
    pub generation: SearchGeneration,
    pub bounds: LatLngBounds,
    pub types: Vec<String>,
    pub keyword: String,
}

/// A details fetch for the result at `index` of the result set tagged
/// `generation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest {
    pub place_id: String,
    #[serde(skip)]
    pub index: usize,
    #[serde(skip)]
    pub generation: SearchGeneration,
    #[serde(skip)]
    pub sequence: u64,
}
