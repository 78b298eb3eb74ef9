// crates/vermak-core/src/geo.rs
//! Geographic primitives shared by the controller and the provider seams.
//!
//! The serde shapes match the provider's literal forms (`{lat, lng}` and
//! `{south, west, north, east}`), so values can be handed to the map API and
//! read back from `JSON.stringify` output without an adapter type.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A rectangular region, edges in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Builds bounds from the south-west and north-east corners.
    pub fn from_corners(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south: south_west.lat,
            west: south_west.lng,
            north: north_east.lat,
            east: north_east.lng,
        }
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Whether `point` lies inside the region. Regions crossing the
    /// antimeridian (`west > east`) wrap around.
    pub fn contains(&self, point: LatLng) -> bool {
        let lat_ok = point.lat >= self.south && point.lat <= self.north;
        let lng_ok = if self.west <= self.east {
            point.lng >= self.west && point.lng <= self.east
        } else {
            point.lng >= self.west || point.lng <= self.east
        };
        lat_ok && lng_ok
    }
}

/// Center and zoom the controller last asked the map to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center: LatLng,
    pub zoom: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_their_corners() {
        let b = LatLngBounds::from_corners(LatLng::new(-6.4708, 106.7801), LatLng::new(-6.3573, 106.9163));
        assert!(b.contains(b.south_west()));
        assert!(b.contains(LatLng::new(-6.40, 106.80)));
        assert!(!b.contains(LatLng::new(-6.20, 106.80)));
    }

    #[test]
    fn bounds_wrap_across_antimeridian() {
        let b = LatLngBounds { south: -10.0, west: 170.0, north: 10.0, east: -170.0 };
        assert!(b.contains(LatLng::new(0.0, 179.0)));
        assert!(b.contains(LatLng::new(0.0, -175.0)));
        assert!(!b.contains(LatLng::new(0.0, 0.0)));
    }
}
