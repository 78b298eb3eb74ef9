// crates/vermak-core/src/controller.rs
//! # Map Search Controller
//!
//! Synchronous state machine behind the page. It owns the surfaces, the
//! current result set and the request tags. Every handler leaves it idle and
//! consistent. The async half, which awaits provider responses, lives in
//! [`crate::session`].
use crate::config::{ControllerConfig, ALL_COUNTRIES};
use crate::details::InfoContent;
use crate::error::{Result, VermakError};
use crate::geo::{LatLng, ViewState};
use crate::place::{
    DetailsRequest, NearbySearchRequest, NearbySearchResponse, PlaceDetailsResponse,
    PlacesStatus, SearchGeneration,
};
use crate::render::{layout, MarkerEntry, Placement, ResultRow};
use crate::traits::{Autocomplete, MapView, ResultsList};
use tracing::{debug, info, warn};

/// What happened to a nearby-search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A fresh result set with this many placements was rendered.
    Rendered(usize),
    /// The search failed or found nothing; the display was cleared.
    Cleared(PlacesStatus),
    /// A newer search or a reset superseded this one; nothing changed.
    Stale,
}

/// What happened to a place-details response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsOutcome {
    Shown,
    /// The fetch failed; the panel was not opened.
    Failed(PlacesStatus),
    /// The result set changed or another place was clicked meanwhile.
    Stale,
}

/// What the place-selection handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Searched(SearchOutcome),
    /// The selection had no location; the user was asked to pick again.
    Prompted,
}

pub struct MapSearchController<V, A, L> {
    config: ControllerConfig,
    map: V,
    autocomplete: A,
    results: L,
    view: ViewState,
    restriction: Vec<String>,
    placements: Vec<Placement>,
    /// Tag of the latest search (or reset); only its response may render.
    generation: SearchGeneration,
    /// Tag of the result set currently on screen.
    shown: SearchGeneration,
    details_sequence: u64,
}

impl<V: MapView, A: Autocomplete, L: ResultsList> MapSearchController<V, A, L> {
    /// Builds the view on the default profile and binds the autocomplete input.
    pub fn init(config: ControllerConfig, mut map: V, mut autocomplete: A, results: L) -> Result<Self> {
        config.validate()?;
        let profile = config.default_profile()?;
        let view = profile.view();

        map.set_center(view.center);
        map.set_zoom(view.zoom);
        autocomplete.bind(&config.autocomplete);

        debug!(country = %config.default_country, center = %view.center, zoom = view.zoom, "map initialized");

        Ok(Self {
            config,
            map,
            autocomplete,
            results,
            view,
            // The widget starts unrestricted; the strict bounds already confine it.
            restriction: Vec::new(),
            placements: Vec::new(),
            generation: SearchGeneration::default(),
            shown: SearchGeneration::default(),
            details_sequence: 0,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Country codes autocomplete suggestions are currently restricted to.
    pub fn restriction(&self) -> &[String] {
        &self.restriction
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerEntry> {
        self.placements.iter().map(|p| &p.marker)
    }

    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.placements.iter().map(|p| &p.row)
    }

    pub fn generation(&self) -> SearchGeneration {
        self.generation
    }

    pub fn map(&self) -> &V {
        &self.map
    }

    pub fn autocomplete(&self) -> &A {
        &self.autocomplete
    }

    pub fn results(&self) -> &L {
        &self.results
    }

    /// Moves to a picked suggestion. Returns `false` (after prompting) when
    /// the suggestion carries no location, in which case no search may follow.
    pub fn focus_place(&mut self, location: Option<LatLng>) -> bool {
        match location {
            Some(center) => {
                self.map.pan_to(center);
                self.map.set_zoom(self.config.place_zoom);
                self.view = ViewState {
                    center,
                    zoom: self.config.place_zoom,
                };
                true
            }
            None => {
                debug!("selection without location, prompting");
                self.autocomplete.prompt(&self.config.placeholder);
                false
            }
        }
    }

    /// Tags a new nearby search over the visible region. Any response to an
    /// earlier search becomes stale.
    pub fn begin_search(&mut self) -> Result<NearbySearchRequest> {
        let bounds = self.map.bounds().ok_or(VermakError::BoundsUnavailable)?;
        self.generation = self.generation.next();
        debug!(generation = %self.generation, ?bounds, "nearby search issued");
        Ok(NearbySearchRequest {
            generation: self.generation,
            bounds,
            types: self.config.search.types.clone(),
            keyword: self.config.search.keyword.clone(),
        })
    }

    /// Installs a nearby-search response, unless a newer search or a reset
    /// happened since `generation` was issued.
    pub fn complete_search(
        &mut self,
        generation: SearchGeneration,
        response: NearbySearchResponse,
    ) -> SearchOutcome {
        if generation != self.generation {
            warn!(%generation, current = %self.generation, "discarding stale search response");
            return SearchOutcome::Stale;
        }

        self.clear_display();
        self.shown = generation;

        if !response.status.is_ok() || response.results.is_empty() {
            warn!(status = %response.status, "nearby search returned nothing");
            let status = if response.status.is_ok() {
                PlacesStatus::ZeroResults
            } else {
                response.status
            };
            return SearchOutcome::Cleared(status);
        }

        self.placements = layout(
            response.results,
            &self.config.marker_icon_base,
            self.config.drop_stagger(),
        );
        if self.placements.is_empty() {
            warn!("no result carried a location");
            return SearchOutcome::Cleared(PlacesStatus::ZeroResults);
        }
        for placement in &self.placements {
            self.map.add_marker(&placement.marker);
            self.results.append_row(&placement.row);
        }

        debug!(%generation, count = self.placements.len(), "results rendered");
        SearchOutcome::Rendered(self.placements.len())
    }

    /// Tags a details fetch for the result at `index`. Marker and row clicks
    /// both land here.
    pub fn begin_details(&mut self, index: usize) -> Result<DetailsRequest> {
        let placement = self.placements.get(index).ok_or(VermakError::NoSuchResult {
            index,
            len: self.placements.len(),
        })?;
        self.details_sequence += 1;
        Ok(DetailsRequest {
            place_id: placement.result.place_id.clone(),
            index,
            generation: self.shown,
            sequence: self.details_sequence,
        })
    }

    /// Opens the info panel for a details response. Failures leave the panel
    /// closed.
    pub fn complete_details(
        &mut self,
        request: &DetailsRequest,
        response: PlaceDetailsResponse,
    ) -> DetailsOutcome {
        if request.generation != self.shown
            || request.sequence != self.details_sequence
            || request.index >= self.placements.len()
        {
            debug!(place_id = %request.place_id, "discarding stale details response");
            return DetailsOutcome::Stale;
        }

        let details = match (response.status, response.result) {
            (PlacesStatus::Ok, Some(details)) => details,
            (status, _) => {
                let status = if status.is_ok() { PlacesStatus::NotFound } else { status };
                warn!(place_id = %request.place_id, %status, "place details unavailable");
                return DetailsOutcome::Failed(status);
            }
        };

        let content = InfoContent::from_details(&details);
        self.map.open_info(request.index, &content);
        DetailsOutcome::Shown
    }

    /// Applies a country selector value and leaves the view empty, ready for a
    /// new search. Unknown codes are rejected before anything changes.
    pub fn country_changed(&mut self, code: &str) -> Result<()> {
        let code = code.trim();
        let (view, restriction) = if code.eq_ignore_ascii_case(ALL_COUNTRIES) {
            (self.config.world, Vec::new())
        } else {
            let profile = self.config.profile(code)?;
            (profile.view(), profile.restriction_for(code))
        };

        self.autocomplete.set_country_restriction(&restriction);
        self.map.set_center(view.center);
        self.map.set_zoom(view.zoom);
        self.view = view;
        self.restriction = restriction;

        self.reset();
        info!(country = code, center = %view.center, zoom = view.zoom, "country filter applied");
        Ok(())
    }

    /// Clears markers and rows and invalidates in-flight requests.
    pub fn reset(&mut self) {
        self.clear_display();
        self.generation = self.generation.next();
        self.shown = self.generation;
    }

    fn clear_display(&mut self) {
        self.results.clear();
        self.map.clear_markers();
        self.placements.clear();
    }
}
