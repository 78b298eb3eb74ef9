// crates/vermak-wasm/src/bindings.rs
//! Imports from the Google Maps JavaScript API (`libraries=places`).
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Clone)]
    pub type GMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(element: &HtmlElement, options: &JsValue) -> GMap;

    #[wasm_bindgen(method, js_class = "Map", js_name = panTo)]
    pub fn pan_to(this: &GMap, center: &JsValue);

    #[wasm_bindgen(method, js_class = "Map", js_name = setCenter)]
    pub fn set_center(this: &GMap, center: &JsValue);

    #[wasm_bindgen(method, js_class = "Map", js_name = setZoom)]
    pub fn set_zoom(this: &GMap, zoom: f64);

    #[wasm_bindgen(method, js_class = "Map", js_name = getBounds)]
    pub fn get_bounds(this: &GMap) -> Option<LatLngBounds>;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type LatLngBounds;

    /// Literal `{south, west, north, east}` form.
    #[wasm_bindgen(method, js_class = "LatLngBounds", js_name = toJSON)]
    pub fn to_json(this: &LatLngBounds) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Marker;

    /// Attaches to `map`, or detaches when given `null`.
    #[wasm_bindgen(method, js_class = "Marker", js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    pub fn new(options: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method, js_class = "InfoWindow")]
    pub fn open(this: &InfoWindow, map: &GMap, anchor: &Marker);

    #[wasm_bindgen(method, js_class = "InfoWindow")]
    pub fn close(this: &InfoWindow);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    #[derive(Clone)]
    pub type Autocomplete;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"], js_class = "Autocomplete")]
    pub fn new(input: &HtmlInputElement, options: &JsValue) -> Autocomplete;

    #[wasm_bindgen(method, js_class = "Autocomplete", js_name = setBounds)]
    pub fn set_bounds(this: &Autocomplete, bounds: &JsValue);

    #[wasm_bindgen(method, js_class = "Autocomplete", js_name = setComponentRestrictions)]
    pub fn set_component_restrictions(this: &Autocomplete, restrictions: &JsValue);

    #[wasm_bindgen(method, js_class = "Autocomplete", js_name = getPlace)]
    pub fn get_place(this: &Autocomplete) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type PlacesService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"], js_class = "PlacesService")]
    pub fn new(map: &GMap) -> PlacesService;

    /// `callback(results, status, pagination)`
    #[wasm_bindgen(method, js_class = "PlacesService", js_name = nearbySearch)]
    pub fn nearby_search(this: &PlacesService, request: &JsValue, callback: &JsValue);

    /// `callback(place, status)`
    #[wasm_bindgen(method, js_class = "PlacesService", js_name = getDetails)]
    pub fn get_details(this: &PlacesService, request: &JsValue, callback: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "event"], js_name = addListener)]
    pub fn add_listener(instance: &JsValue, event: &str, handler: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps", "event"], js_name = clearInstanceListeners)]
    pub fn clear_instance_listeners(instance: &JsValue);
}

/// `google.maps.Animation.DROP`, looked up at runtime.
pub fn drop_animation() -> JsValue {
    ["google", "maps", "Animation", "DROP"]
        .iter()
        .try_fold(js_sys::global().into(), |obj: JsValue, key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key)).ok()
        })
        .unwrap_or(JsValue::UNDEFINED)
}
