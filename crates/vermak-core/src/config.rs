// crates/vermak-core/src/config.rs
//! # Controller Configuration
//!
//! Static settings for one page session: the country profiles offered by the
//! selector, the autocomplete restriction, the nearby-search filters and the
//! marker presentation. [`ControllerConfig::default`] is the reference
//! instance (tailor shops matching "vermak" around Depok, Indonesia).
use crate::error::{Result, VermakError};
use crate::geo::{LatLng, LatLngBounds, ViewState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Country selector value that lifts the autocomplete restriction.
pub const ALL_COUNTRIES: &str = "all";

pub const MARKER_ICON_BASE: &str =
    "https://developers.google.com/maps/documentation/javascript/images/marker_green";

/// Center and zoom for one selector entry, plus the component restriction
/// applied to autocomplete when it is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub center: LatLng,
    pub zoom: f64,
    /// Country codes passed to the autocomplete restriction. Empty means
    /// "use the selector code itself".
    #[serde(default)]
    pub restriction: Vec<String>,
}

impl CountryProfile {
    pub fn view(&self) -> ViewState {
        ViewState {
            center: self.center,
            zoom: self.zoom,
        }
    }

    /// Restriction codes, falling back to the selector code.
    pub fn restriction_for(&self, code: &str) -> Vec<String> {
        if self.restriction.is_empty() {
            vec![code.to_string()]
        } else {
            self.restriction.clone()
        }
    }
}

/// Options the autocomplete input is bound with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteOptions {
    /// Suggestion types, e.g. `["geocode"]`.
    pub types: Vec<String>,
    pub strict_bounds: bool,
    /// Region suggestions are confined to when `strict_bounds` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<LatLngBounds>,
}

/// Category and keyword filters sent with every nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub types: Vec<String>,
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Profile the map opens on.
    pub default_country: String,
    pub countries: BTreeMap<String, CountryProfile>,
    /// View used when the selector is set to [`ALL_COUNTRIES`].
    pub world: ViewState,
    pub autocomplete: AutocompleteOptions,
    pub search: SearchFilter,
    /// Zoom applied after a suggestion is picked.
    pub place_zoom: f64,
    pub marker_icon_base: String,
    /// Delay between consecutive marker drops, in milliseconds.
    pub drop_stagger_ms: u64,
    /// Placeholder shown when the user submits text without picking a suggestion.
    pub placeholder: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let mut countries = BTreeMap::new();
        countries.insert(
            "dpk".to_string(),
            CountryProfile {
                center: LatLng::new(-6.402905, 106.778419),
                zoom: 12.5,
                restriction: vec!["id".to_string()],
            },
        );

        Self {
            default_country: "dpk".to_string(),
            countries,
            world: ViewState {
                center: LatLng::new(15.0, 0.0),
                zoom: 2.0,
            },
            autocomplete: AutocompleteOptions {
                types: vec!["geocode".to_string()],
                strict_bounds: true,
                // Depok, Indonesia
                bounds: Some(LatLngBounds::from_corners(
                    LatLng::new(-6.4708, 106.7801),
                    LatLng::new(-6.3573, 106.9163),
                )),
            },
            search: SearchFilter {
                types: vec!["tailor".to_string()],
                keyword: "vermak".to_string(),
            },
            place_zoom: 15.0,
            marker_icon_base: MARKER_ICON_BASE.to_string(),
            drop_stagger_ms: 100,
            placeholder: "Masukkan nama kelurahan".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Looks up a selector code. Codes are matched case-insensitively.
    pub fn profile(&self, code: &str) -> Result<&CountryProfile> {
        self.countries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(code.trim()))
            .map(|(_, p)| p)
            .ok_or_else(|| VermakError::UnknownCountry(code.to_string()))
    }

    pub fn default_profile(&self) -> Result<&CountryProfile> {
        self.profile(&self.default_country)
    }

    pub fn drop_stagger(&self) -> Duration {
        Duration::from_millis(self.drop_stagger_ms)
    }

    /// Checks the invariants the controller relies on.
    pub fn validate(&self) -> Result<()> {
        if self.countries.keys().any(|k| k.eq_ignore_ascii_case(ALL_COUNTRIES)) {
            return Err(VermakError::Config(format!(
                "'{ALL_COUNTRIES}' is reserved and cannot name a country profile"
            )));
        }
        self.default_profile().map_err(|_| {
            VermakError::Config(format!(
                "default country '{}' has no profile",
                self.default_country
            ))
        })?;
        for (code, profile) in &self.countries {
            if !profile.zoom.is_finite() || profile.zoom < 0.0 {
                return Err(VermakError::Config(format!(
                    "profile '{code}' has invalid zoom {}",
                    profile.zoom
                )));
            }
        }
        if self.search.types.is_empty() && self.search.keyword.trim().is_empty() {
            return Err(VermakError::Config(
                "search needs at least one type or a keyword".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_instance_is_valid() {
        let cfg = ControllerConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.default_profile().unwrap().zoom, 12.5);
        assert_eq!(cfg.drop_stagger(), Duration::from_millis(100));
    }

    #[test]
    fn missing_default_profile_is_a_config_error() {
        let cfg = ControllerConfig {
            default_country: "xx".into(),
            ..ControllerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(VermakError::Config(_))));
    }

    #[test]
    fn restriction_falls_back_to_code() {
        let p = CountryProfile {
            center: LatLng::new(0.0, 0.0),
            zoom: 5.0,
            restriction: vec![],
        };
        assert_eq!(p.restriction_for("de"), vec!["de".to_string()]);
    }
}
