//! Basic usage of vermak-core
//!
//! Drives a search session against an in-memory map and a canned places
//! service, printing each step the page would show.

use futures::executor::block_on;
use futures::future::{self, FutureExt, LocalBoxFuture};
use vermak_core::place::{DetailsRequest, Geometry};
use vermak_core::prelude::*;

struct ConsoleMap {
    bounds: LatLngBounds,
}

impl MapView for ConsoleMap {
    fn pan_to(&mut self, center: LatLng) {
        println!("  map: pan to {center}");
    }

    fn set_center(&mut self, center: LatLng) {
        println!("  map: center {center}");
    }

    fn set_zoom(&mut self, zoom: f64) {
        println!("  map: zoom {zoom}");
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(self.bounds)
    }

    fn add_marker(&mut self, m: &MarkerEntry) {
        let inside = if self.bounds.contains(m.position) { "" } else { " (outside view)" };
        println!("  map: marker {} at {} after {}ms{inside}", m.label, m.position, m.drop_delay.as_millis());
    }

    fn clear_markers(&mut self) {
        println!("  map: clear markers");
    }

    fn open_info(&mut self, anchor: usize, content: &InfoContent) {
        println!("  map: info window on marker {anchor}");
        for line in content.to_string().lines() {
            println!("    | {line}");
        }
    }
}

struct ConsoleAutocomplete;

impl Autocomplete for ConsoleAutocomplete {
    fn bind(&mut self, options: &AutocompleteOptions) {
        println!("  autocomplete: types {:?}, strict {}", options.types, options.strict_bounds);
    }

    fn set_country_restriction(&mut self, countries: &[String]) {
        println!("  autocomplete: restrict to {countries:?}");
    }

    fn prompt(&mut self, text: &str) {
        println!("  autocomplete: placeholder \"{text}\"");
    }
}

struct ConsoleList;

impl ResultsList for ConsoleList {
    fn clear(&mut self) {
        println!("  list: clear");
    }

    fn append_row(&mut self, row: &ResultRow) {
        println!("  list: [{}] {} ({})", row.index, row.name, row.stripe.color());
    }
}

struct CannedPlaces;

impl PlacesService for CannedPlaces {
    fn nearby_search(&self, request: &NearbySearchRequest) -> LocalBoxFuture<'static, NearbySearchResponse> {
        let center = request.bounds.south_west();
        let results = ["Vermak Jeans Beji", "Permak Levis Kukusan", "Tailor Margonda"]
            .iter()
            .enumerate()
            .map(|(i, name)| SearchResult {
                place_id: format!("demo-{i}"),
                name: name.to_string(),
                geometry: Some(Geometry {
                    location: Some(LatLng::new(center.lat + 0.001 * (i + 1) as f64, center.lng + 0.001)),
                }),
                rating: None,
                vicinity: None,
                formatted_phone_number: None,
                url: None,
                website: None,
                icon: None,
            })
            .collect();
        future::ready(NearbySearchResponse::ok(results)).boxed_local()
    }

    fn place_details(&self, request: &DetailsRequest) -> LocalBoxFuture<'static, PlaceDetailsResponse> {
        let details = PlaceDetails {
            place_id: Some(request.place_id.clone()),
            name: "Permak Levis Kukusan".into(),
            url: Some("https://maps.google.com/?cid=1".into()),
            vicinity: Some("Jl. Kukusan Raya No. 5".into()),
            rating: Some(4.3),
            website: Some("permaklevis.example.id".into()),
            ..PlaceDetails::default()
        };
        future::ready(PlaceDetailsResponse::ok(details)).boxed_local()
    }
}

fn main() -> Result<()> {
    println!("=== vermak-core basic usage ===\n");

    println!("--- init ---");
    let config = ControllerConfig::default();
    let bounds = LatLngBounds {
        south: -6.38,
        west: 106.81,
        north: -6.36,
        east: 106.83,
    };
    let session = SearchSession::init(
        config,
        ConsoleMap { bounds },
        ConsoleAutocomplete,
        ConsoleList,
        CannedPlaces,
    )?;

    println!("\n--- Enter pressed without picking a suggestion ---");
    let out = block_on(session.place_changed(&PlaceSelection::unresolved("kukusan")))?;
    println!("  => {out:?}");

    println!("\n--- suggestion picked ---");
    let pick = PlaceSelection::at("Kukusan, Beji", LatLng::new(-6.3700, 106.8200));
    let out = block_on(session.place_changed(&pick))?;
    println!("  => {out:?}");

    println!("\n--- row B clicked ---");
    let out = block_on(session.select_result(1))?;
    println!("  => {out:?}");

    println!("\n--- country selector set to 'all' ---");
    session.country_changed(ALL_COUNTRIES)?;

    println!("\n--- country selector set to unknown 'xx' ---");
    if let Err(e) = session.country_changed("xx") {
        println!("  => error: {e}");
    }

    Ok(())
}
