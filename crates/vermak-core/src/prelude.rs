// crates/vermak-core/src/prelude.rs
pub use crate::config::{AutocompleteOptions, ControllerConfig, CountryProfile, ALL_COUNTRIES};
pub use crate::controller::{DetailsOutcome, MapSearchController, PlaceOutcome, SearchOutcome};
pub use crate::details::{InfoContent, Rating, Website};
pub use crate::error::{Result, VermakError};
pub use crate::geo::{LatLng, LatLngBounds, ViewState};
pub use crate::place::{
    NearbySearchRequest, NearbySearchResponse, PlaceDetails, PlaceDetailsResponse, PlaceSelection,
    PlacesStatus, SearchResult,
};
pub use crate::render::{marker_label, MarkerEntry, Placement, ResultRow, RowStripe};
pub use crate::session::SearchSession;
pub use crate::traits::{Autocomplete, MapView, PlacesService, ResultsList};
