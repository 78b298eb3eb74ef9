// crates/vermak-core/src/traits.rs
//! Seams to the external collaborators.
//!
//! The controller never talks to a map SDK or the DOM directly. The browser
//! crate implements these traits on top of the Google Maps JavaScript API;
//! tests and the CLI implement them in memory.
use crate::config::AutocompleteOptions;
use crate::details::InfoContent;
use crate::geo::{LatLng, LatLngBounds};
use crate::place::{
    DetailsRequest, NearbySearchRequest, NearbySearchResponse, PlaceDetailsResponse,
};
use crate::render::{MarkerEntry, ResultRow};
use futures::future::LocalBoxFuture;

/// The rendered map.
pub trait MapView {
    /// Animated move to `center`.
    fn pan_to(&mut self, center: LatLng);
    fn set_center(&mut self, center: LatLng);
    fn set_zoom(&mut self, zoom: f64);

    /// Currently visible region, `None` until the map has laid itself out.
    fn bounds(&self) -> Option<LatLngBounds>;

    /// Creates a marker that drops onto the map after `marker.drop_delay`.
    /// A click on it must lead to `select_result(marker.index)`, whether or not
    /// the drop has happened yet.
    fn add_marker(&mut self, marker: &MarkerEntry);

    /// Detaches and forgets every marker, including ones still waiting to drop.
    fn clear_markers(&mut self);

    /// Opens the info panel anchored on the marker at `anchor`.
    fn open_info(&mut self, anchor: usize, content: &InfoContent);
}

/// The autocomplete input.
pub trait Autocomplete {
    fn bind(&mut self, options: &AutocompleteOptions);

    /// Restricts suggestions to `countries`; an empty slice lifts the restriction.
    fn set_country_restriction(&mut self, countries: &[String]);

    /// Shows `text` as the input placeholder.
    fn prompt(&mut self, text: &str);
}

/// The results list next to the map.
pub trait ResultsList {
    fn clear(&mut self);

    /// Appends `row`. A click on it must lead to `select_result(row.index)`.
    fn append_row(&mut self, row: &ResultRow);
}

/// Nearby-search and place-details queries. Each future resolves exactly once.
pub trait PlacesService {
    fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> LocalBoxFuture<'static, NearbySearchResponse>;

    fn place_details(&self, request: &DetailsRequest) -> LocalBoxFuture<'static, PlaceDetailsResponse>;
}
