//! vermak-wasm: the map-search controller in the browser
//!
//! This crate wires `vermak-core` to the Google Maps JavaScript API and the
//! page DOM. The page loads the Maps API with the Places library and calls
//! `initMap` once it is ready.
//!
//! What it provides
//! ----------------
//! - `initMap()`: builds the map, the autocomplete input and the info window
//!   from the reference configuration and wires all listeners.
//! - `initMapWithConfig(json)`: same, with a JSON `ControllerConfig`.
//! - Pure helpers usable from JS: `marker_label(i)`, `rating_stars(r)`,
//!   `short_website(url)`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { initMap } from 'vermak-wasm';
//!
//! await init();
//! window.initMap = initMap;
//! // <script src="https://maps.googleapis.com/maps/api/js?key=KEY&libraries=places&callback=initMap">
//! ```
//!
//! Page anchors
//! ------------
//! `#map`, `#autocomplete` (input), `#country` (select), `#results` (tbody),
//! `#info-content` with `#iw-icon`, `#iw-url`, `#iw-address`, `#iw-phone-row`,
//! `#iw-phone`, `#iw-rating-row`, `#iw-rating`, `#iw-website-row`, `#iw-website`.
mod bindings;
mod browser;
mod convert;
mod dom;
mod logging;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

use crate::bindings::GMap;
use crate::browser::{BrowserAutocomplete, BrowserMap, BrowserPlaces, BrowserResults, Select};
use crate::convert::to_js;
use serde::Serialize;
use vermak_core::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

type App = SearchSession<BrowserMap, BrowserAutocomplete, BrowserResults, BrowserPlaces>;

thread_local! {
    // One controller per page session.
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom: f64,
    center: LatLng,
    map_type_control: bool,
    pan_control: bool,
    zoom_control: bool,
    street_view_control: bool,
}

fn js_err(e: VermakError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn report<T: std::fmt::Debug>(context: &str, outcome: Result<T>) {
    match outcome {
        Ok(v) => web_sys::console::debug_1(&format!("{context}: {v:?}").into()),
        Err(e) => web_sys::console::error_1(&format!("{context}: {e}").into()),
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    web_sys::console::log_1(&"vermak-wasm loaded, waiting for initMap".into());
}

#[wasm_bindgen(js_name = initMap)]
pub fn init_map() -> std::result::Result<(), JsValue> {
    mount(ControllerConfig::default())
}

#[wasm_bindgen(js_name = initMapWithConfig)]
pub fn init_map_with_config(config_json: &str) -> std::result::Result<(), JsValue> {
    mount(ControllerConfig::from_json_str(config_json).map_err(js_err)?)
}

fn mount(config: ControllerConfig) -> std::result::Result<(), JsValue> {
    let document = dom::document()?;
    let profile = config.default_profile().map_err(js_err)?.clone();
    let country = config.default_country.clone();

    let map = GMap::new(
        &dom::element::<HtmlElement>(&document, "map")?,
        &to_js(&MapOptions {
            zoom: profile.zoom,
            center: profile.center,
            map_type_control: false,
            pan_control: false,
            zoom_control: false,
            street_view_control: false,
        })?,
    );

    // Marker and row clicks reach the session through this slot, which is
    // filled once the session exists.
    let slot: Rc<RefCell<Weak<App>>> = Rc::new(RefCell::new(Weak::new()));
    let select: Select = {
        let slot = slot.clone();
        Rc::new(move |index: usize| {
            if let Some(app) = slot.borrow().upgrade() {
                wasm_bindgen_futures::spawn_local(async move {
                    report("details", app.select_result(index).await);
                });
            }
        })
    };

    let places = BrowserPlaces::new(&map);
    let panel = dom::InfoPanel::locate(&document)?;
    let input: HtmlInputElement = dom::element(&document, "autocomplete")?;
    let results: HtmlElement = dom::element(&document, "results")?;

    let app = Rc::new(
        SearchSession::init(
            config,
            BrowserMap::new(map, panel, select.clone())?,
            BrowserAutocomplete::new(input),
            BrowserResults::new(document.clone(), results, select),
            places,
        )
        .map_err(js_err)?,
    );
    *slot.borrow_mut() = Rc::downgrade(&app);

    listen_place_changed(&app)?;
    listen_country(&app, &dom::element(&document, "country")?)?;

    APP.with(|cell| *cell.borrow_mut() = Some(app));
    web_sys::console::log_1(&format!("map ready on '{country}'").into());
    Ok(())
}

fn listen_place_changed(app: &Rc<App>) -> std::result::Result<(), JsValue> {
    let widget = app
        .controller()
        .autocomplete()
        .handle()
        .cloned()
        .ok_or_else(|| JsValue::from_str("autocomplete was not bound"))?;

    let weak = Rc::downgrade(app);
    let source = widget.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let Some(app) = weak.upgrade() else {
            return;
        };
        let selection = convert::selection(&source.get_place());
        wasm_bindgen_futures::spawn_local(async move {
            report("place changed", app.place_changed(&selection).await);
        });
    });
    bindings::add_listener(&widget, "place_changed", on_change.as_ref());
    // Page-lifetime listener.
    on_change.forget();
    Ok(())
}

fn listen_country(app: &Rc<App>, select: &HtmlSelectElement) -> std::result::Result<(), JsValue> {
    let weak = Rc::downgrade(app);
    let source = select.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        if let Some(app) = weak.upgrade() {
            report("country changed", app.country_changed(&source.value()));
        }
    });
    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

/* --------------------------------------------------------------------------
   Pure helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn marker_label(index: usize) -> String {
    vermak_core::render::marker_label(index).to_string()
}

#[wasm_bindgen]
pub fn rating_stars(rating: f64) -> String {
    Rating(rating).to_string()
}

/// Returns `[display, href]`.
#[wasm_bindgen]
pub fn short_website(url: &str) -> js_sys::Array {
    let site = Website::shorten(url);
    let out = js_sys::Array::new();
    out.push(&site.display.into());
    out.push(&site.href.into());
    out
}
