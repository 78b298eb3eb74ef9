// crates/vermak-core/src/render.rs
//! # Marker and Result Rendering
//!
//! Turns a result sequence into index-aligned markers and list rows. Each
//! result gets a letter `A`..`Z` (cycling after 26), a matching lettered icon
//! and a drop delay proportional to its position.
use crate::geo::LatLng;
use crate::place::SearchResult;
use std::time::Duration;

/// Number of distinct marker letters.
pub const LABEL_CYCLE: usize = 26;

/// Letter for the result at `index`: `A` for 0, `Z` for 25, `A` again for 26.
pub fn marker_label(index: usize) -> char {
    (b'A' + (index % LABEL_CYCLE) as u8) as char
}

/// Lettered icon URL, e.g. `{base}C.png` for index 2.
pub fn marker_icon_url(base: &str, index: usize) -> String {
    format!("{base}{}.png", marker_label(index))
}

/// Background stripe of a results-list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStripe {
    Even,
    Odd,
}

impl RowStripe {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowStripe::Even
        } else {
            RowStripe::Odd
        }
    }

    /// CSS background color.
    pub fn color(self) -> &'static str {
        match self {
            RowStripe::Even => "#F0F0F0",
            RowStripe::Odd => "#FFFFFF",
        }
    }
}

/// A marker to be dropped on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntry {
    pub index: usize,
    pub label: char,
    pub icon: String,
    pub position: LatLng,
    /// How long after creation the marker is attached to the map.
    pub drop_delay: Duration,
}

/// A row of the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub index: usize,
    pub icon: String,
    pub name: String,
    pub stripe: RowStripe,
}

/// A result with its marker and row. The controller stores these, so
/// `markers[i]` and row `i` can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub result: SearchResult,
    pub marker: MarkerEntry,
    pub row: ResultRow,
}

/// Builds placements in response order. Results without a location cannot be
/// placed on the map and are skipped before indices are assigned.
pub fn layout(results: Vec<SearchResult>, icon_base: &str, stagger: Duration) -> Vec<Placement> {
    results
        .into_iter()
        .filter_map(|result| match result.location() {
            Some(position) => Some((result, position)),
            None => {
                tracing::debug!(place_id = %result.place_id, "skipping result without location");
                None
            }
        })
        .enumerate()
        .map(|(index, (result, position))| {
            let icon = marker_icon_url(icon_base, index);
            let marker = MarkerEntry {
                index,
                label: marker_label(index),
                icon: icon.clone(),
                position,
                drop_delay: stagger * index as u32,
            };
            let row = ResultRow {
                index,
                icon,
                name: result.name.clone(),
                stripe: RowStripe::for_index(index),
            };
            Placement { result, marker, row }
        })
        .collect()
}
