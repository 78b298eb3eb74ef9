//! In-memory surfaces that record what the controller would draw.
use vermak_core::prelude::*;

#[derive(Default)]
pub struct PreviewMap {
    pub bounds: Option<LatLngBounds>,
    pub markers: Vec<MarkerEntry>,
    pub info: Option<(usize, InfoContent)>,
}

impl MapView for PreviewMap {
    fn pan_to(&mut self, _center: LatLng) {}

    fn set_center(&mut self, _center: LatLng) {}

    fn set_zoom(&mut self, _zoom: f64) {}

    fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds
    }

    fn add_marker(&mut self, marker: &MarkerEntry) {
        self.markers.push(marker.clone());
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.info = None;
    }

    fn open_info(&mut self, anchor: usize, content: &InfoContent) {
        self.info = Some((anchor, content.clone()));
    }
}

#[derive(Default)]
pub struct PreviewAutocomplete;

impl Autocomplete for PreviewAutocomplete {
    fn bind(&mut self, _options: &AutocompleteOptions) {}

    fn set_country_restriction(&mut self, _countries: &[String]) {}

    fn prompt(&mut self, _text: &str) {}
}

#[derive(Default)]
pub struct PreviewList {
    pub rows: Vec<ResultRow>,
}

impl ResultsList for PreviewList {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &ResultRow) {
        self.rows.push(row.clone());
    }
}

pub type PreviewController = MapSearchController<PreviewMap, PreviewAutocomplete, PreviewList>;

/// A controller whose map "shows" the configured autocomplete region, or the
/// whole world when none is configured.
pub fn controller(config: ControllerConfig) -> Result<PreviewController> {
    let bounds = config.autocomplete.bounds.unwrap_or(LatLngBounds {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    });
    let map = PreviewMap {
        bounds: Some(bounds),
        ..PreviewMap::default()
    };
    MapSearchController::init(config, map, PreviewAutocomplete, PreviewList::default())
}
