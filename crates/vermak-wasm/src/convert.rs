// crates/vermak-wasm/src/convert.rs
//! Moving values across the JS boundary.
//!
//! Provider objects are read through `JSON.stringify`, which turns
//! `google.maps.LatLng` into `{lat, lng}` via its `toJSON`, and then parsed
//! with serde. Outgoing literals use the JSON-compatible serializer so they
//! arrive as plain objects rather than `Map`s.
use serde::de::DeserializeOwned;
use serde::Serialize;
use vermak_core::place::{NearbySearchResponse, PlaceDetailsResponse, PlacesStatus, PlaceSelection};
use wasm_bindgen::JsValue;

pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

/// Parses a provider object; `None` for `null`/`undefined` or unparseable input.
pub fn from_js<T: DeserializeOwned>(value: &JsValue) -> Option<T> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "unreadable provider object");
            None
        }
    }
}

pub fn status(value: &JsValue) -> PlacesStatus {
    value
        .as_string()
        .map(|s| PlacesStatus::parse(&s))
        .unwrap_or(PlacesStatus::UnknownError)
}

/// An OK reply whose result array cannot be read is reported as `UNKNOWN_ERROR`.
pub fn nearby_response(results: &JsValue, status_value: &JsValue) -> NearbySearchResponse {
    let status = status(status_value);
    match from_js(results) {
        Some(results) => NearbySearchResponse { status, results },
        None if status.is_ok() && !(results.is_null() || results.is_undefined()) => {
            NearbySearchResponse::failed(PlacesStatus::UnknownError)
        }
        None => NearbySearchResponse { status, results: Vec::new() },
    }
}

pub fn details_response(place: &JsValue, status_value: &JsValue) -> PlaceDetailsResponse {
    PlaceDetailsResponse {
        status: status(status_value),
        result: from_js(place),
    }
}

pub fn selection(place: &JsValue) -> PlaceSelection {
    from_js(place).unwrap_or_default()
}
