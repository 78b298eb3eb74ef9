// crates/vermak-core/src/loader.rs
//! # JSON Loader
//!
//! Reads controller configuration and captured provider payloads. Config
//! files may be partial; missing fields take the reference defaults.
use crate::config::ControllerConfig;
use crate::error::{Result, VermakError};
use crate::place::{NearbySearchResponse, PlaceDetailsResponse};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl ControllerConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ControllerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config: ControllerConfig = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }
}

impl NearbySearchResponse {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }
}

impl PlaceDetailsResponse {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }
}

/// Opens a file and deserializes it, mapping a missing file to `NotFound`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        VermakError::NotFound(format!("{}: {}", path.display(), e))
    })?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = ControllerConfig::from_json_str(
            r#"{
                "default_country": "de",
                "countries": {
                    "de": { "center": { "lat": 51.1, "lng": 10.4 }, "zoom": 5.0 }
                },
                "search": { "types": ["cafe"], "keyword": "espresso" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.search.keyword, "espresso");
        assert_eq!(cfg.place_zoom, 15.0);
        assert_eq!(cfg.profile("DE").unwrap().restriction_for("de"), vec!["de"]);
    }

    #[test]
    fn reserved_all_code_is_rejected() {
        let err = ControllerConfig::from_json_str(
            r#"{"countries": {"all": {"center": {"lat": 0, "lng": 0}, "zoom": 1}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, VermakError::Config(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ControllerConfig::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, VermakError::NotFound(_)));
    }
}
