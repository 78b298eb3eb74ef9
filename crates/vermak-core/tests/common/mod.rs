// In-memory surfaces and a scriptable places service for the integration tests.
#![allow(dead_code)]

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use vermak_core::place::DetailsRequest;
use vermak_core::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    PanTo(LatLng),
    SetCenter(LatLng),
    SetZoom(f64),
    ClearMarkers,
}

#[derive(Default)]
pub struct FakeMap {
    pub calls: Vec<MapCall>,
    pub bounds: Option<LatLngBounds>,
    pub markers: Vec<MarkerEntry>,
    pub opened: Option<(usize, InfoContent)>,
}

impl FakeMap {
    pub fn with_bounds() -> Self {
        Self {
            bounds: Some(LatLngBounds {
                south: -6.42,
                west: 106.76,
                north: -6.38,
                east: 106.80,
            }),
            ..Self::default()
        }
    }
}

impl MapView for FakeMap {
    fn pan_to(&mut self, center: LatLng) {
        self.calls.push(MapCall::PanTo(center));
    }

    fn set_center(&mut self, center: LatLng) {
        self.calls.push(MapCall::SetCenter(center));
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.calls.push(MapCall::SetZoom(zoom));
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds
    }

    fn add_marker(&mut self, marker: &MarkerEntry) {
        self.markers.push(marker.clone());
    }

    fn clear_markers(&mut self) {
        self.calls.push(MapCall::ClearMarkers);
        self.markers.clear();
        self.opened = None;
    }

    fn open_info(&mut self, anchor: usize, content: &InfoContent) {
        self.opened = Some((anchor, content.clone()));
    }
}

#[derive(Default)]
pub struct FakeAutocomplete {
    pub options: Option<AutocompleteOptions>,
    pub restriction: Option<Vec<String>>,
    pub placeholder: Option<String>,
}

impl Autocomplete for FakeAutocomplete {
    fn bind(&mut self, options: &AutocompleteOptions) {
        self.options = Some(options.clone());
    }

    fn set_country_restriction(&mut self, countries: &[String]) {
        self.restriction = Some(countries.to_vec());
    }

    fn prompt(&mut self, text: &str) {
        self.placeholder = Some(text.to_string());
    }
}

#[derive(Default)]
pub struct FakeList {
    pub rows: Vec<ResultRow>,
    pub clears: usize,
}

impl ResultsList for FakeList {
    fn clear(&mut self) {
        self.clears += 1;
        self.rows.clear();
    }

    fn append_row(&mut self, row: &ResultRow) {
        self.rows.push(row.clone());
    }
}

/// Answers from scripted queues when it can; otherwise parks the request
/// until the test resolves it, so responses can be delivered out of order.
#[derive(Default)]
pub struct FakePlaces {
    pub search_replies: RefCell<VecDeque<NearbySearchResponse>>,
    pub detail_replies: RefCell<HashMap<String, PlaceDetailsResponse>>,
    pub searches: RefCell<Vec<NearbySearchRequest>>,
    pub detail_requests: RefCell<Vec<String>>,
    pending_searches: RefCell<Vec<Option<oneshot::Sender<NearbySearchResponse>>>>,
    pending_details: RefCell<Vec<Option<oneshot::Sender<PlaceDetailsResponse>>>>,
}

impl FakePlaces {
    pub fn reply_search(self, response: NearbySearchResponse) -> Self {
        self.search_replies.borrow_mut().push_back(response);
        self
    }

    pub fn reply_details(self, place_id: &str, response: PlaceDetailsResponse) -> Self {
        self.detail_replies
            .borrow_mut()
            .insert(place_id.to_string(), response);
        self
    }

    /// Resolves the `n`-th parked search (0-based, in issue order).
    pub fn resolve_search(&self, n: usize, response: NearbySearchResponse) {
        let tx = self.pending_searches.borrow_mut()[n]
            .take()
            .expect("search already resolved");
        tx.send(response).expect("search receiver dropped");
    }

    pub fn resolve_details(&self, n: usize, response: PlaceDetailsResponse) {
        let tx = self.pending_details.borrow_mut()[n]
            .take()
            .expect("details already resolved");
        tx.send(response).expect("details receiver dropped");
    }
}

impl PlacesService for FakePlaces {
    fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> LocalBoxFuture<'static, NearbySearchResponse> {
        self.searches.borrow_mut().push(request.clone());
        if let Some(reply) = self.search_replies.borrow_mut().pop_front() {
            return future::ready(reply).boxed_local();
        }
        let (tx, rx) = oneshot::channel();
        self.pending_searches.borrow_mut().push(Some(tx));
        rx.map(|r| r.unwrap_or_else(|_| NearbySearchResponse::failed(PlacesStatus::UnknownError)))
            .boxed_local()
    }

    fn place_details(&self, request: &DetailsRequest) -> LocalBoxFuture<'static, PlaceDetailsResponse> {
        let place_id = request.place_id.as_str();
        self.detail_requests.borrow_mut().push(place_id.to_string());
        if let Some(reply) = self.detail_replies.borrow().get(place_id) {
            return future::ready(reply.clone()).boxed_local();
        }
        let (tx, rx) = oneshot::channel();
        self.pending_details.borrow_mut().push(Some(tx));
        rx.map(|r| r.unwrap_or_else(|_| PlaceDetailsResponse::failed(PlacesStatus::UnknownError)))
            .boxed_local()
    }
}

pub type TestSession = SearchSession<FakeMap, FakeAutocomplete, FakeList, FakePlaces>;

pub fn session(places: FakePlaces) -> TestSession {
    SearchSession::init(
        ControllerConfig::default(),
        FakeMap::with_bounds(),
        FakeAutocomplete::default(),
        FakeList::default(),
        places,
    )
    .expect("default config initializes")
}

pub fn result(place_id: &str, name: &str, lat: f64, lng: f64) -> SearchResult {
    SearchResult {
        place_id: place_id.to_string(),
        name: name.to_string(),
        geometry: Some(vermak_core::place::Geometry {
            location: Some(LatLng::new(lat, lng)),
        }),
        rating: None,
        vicinity: None,
        formatted_phone_number: None,
        url: None,
        website: None,
        icon: None,
    }
}

/// `n` results spread on a line inside the test bounds.
pub fn results(n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| {
            result(
                &format!("place-{i}"),
                &format!("Tailor {i}"),
                -6.40,
                106.77 + i as f64 * 0.0001,
            )
        })
        .collect()
}

pub fn details(name: &str) -> PlaceDetails {
    PlaceDetails {
        place_id: None,
        name: name.to_string(),
        url: Some(format!("https://maps.google.com/?cid={name}")),
        icon: Some("https://maps.gstatic.com/icon.png".to_string()),
        vicinity: Some("Jl. Margonda Raya".to_string()),
        formatted_address: None,
        formatted_phone_number: None,
        rating: None,
        website: None,
    }
}
