// crates/vermak-core/src/session.rs
//! # Search Session
//!
//! Async front of the controller. Each handler reads as a straight line:
//! tag the request, await the provider, install the response. The controller
//! sits in a `RefCell` and is never borrowed across an `.await`, so several
//! handlers may be in flight at once on a single-threaded executor; stale
//! responses are dropped by their tags.
use crate::config::ControllerConfig;
use crate::controller::{DetailsOutcome, MapSearchController, PlaceOutcome, SearchOutcome};
use crate::error::Result;
use crate::place::PlaceSelection;
use crate::traits::{Autocomplete, MapView, PlacesService, ResultsList};
use std::cell::{Ref, RefCell};

pub struct SearchSession<V, A, L, P> {
    controller: RefCell<MapSearchController<V, A, L>>,
    places: P,
}

impl<V, A, L, P> SearchSession<V, A, L, P>
where
    V: MapView,
    A: Autocomplete,
    L: ResultsList,
    P: PlacesService,
{
    /// Runs the initializer and pairs the controller with a places service.
    pub fn init(config: ControllerConfig, map: V, autocomplete: A, results: L, places: P) -> Result<Self> {
        let controller = MapSearchController::init(config, map, autocomplete, results)?;
        Ok(Self::new(controller, places))
    }

    pub fn new(controller: MapSearchController<V, A, L>, places: P) -> Self {
        Self {
            controller: RefCell::new(controller),
            places,
        }
    }

    pub fn controller(&self) -> Ref<'_, MapSearchController<V, A, L>> {
        self.controller.borrow()
    }

    pub fn places(&self) -> &P {
        &self.places
    }

    /// Handles a suggestion pick: zoom in on it and search around it.
    pub async fn place_changed(&self, selection: &PlaceSelection) -> Result<PlaceOutcome> {
        if !self.controller.borrow_mut().focus_place(selection.location()) {
            return Ok(PlaceOutcome::Prompted);
        }
        Ok(PlaceOutcome::Searched(self.search().await?))
    }

    /// Searches the visible region and renders whatever comes back, unless a
    /// newer search overtakes it.
    pub async fn search(&self) -> Result<SearchOutcome> {
        let request = self.controller.borrow_mut().begin_search()?;
        let response = self.places.nearby_search(&request).await;
        Ok(self
            .controller
            .borrow_mut()
            .complete_search(request.generation, response))
    }

    /// Opens the detail panel for the result at `index`.
    pub async fn select_result(&self, index: usize) -> Result<DetailsOutcome> {
        let request = self.controller.borrow_mut().begin_details(index)?;
        let response = self.places.place_details(&request).await;
        Ok(self.controller.borrow_mut().complete_details(&request, response))
    }

    pub fn country_changed(&self, code: &str) -> Result<()> {
        self.controller.borrow_mut().country_changed(code)
    }
}
