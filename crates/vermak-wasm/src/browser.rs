// crates/vermak-wasm/src/browser.rs
//! Browser implementations of the controller's surfaces.
use crate::bindings::{self, GMap, InfoWindow, Marker};
use crate::convert::{self, to_js};
use crate::dom::{self, InfoPanel};
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use vermak_core::config::AutocompleteOptions;
use vermak_core::details::InfoContent;
use vermak_core::geo::{LatLng, LatLngBounds};
use vermak_core::place::{
    DetailsRequest, NearbySearchRequest, NearbySearchResponse, PlaceDetailsResponse, PlacesStatus,
};
use vermak_core::render::{MarkerEntry, ResultRow};
use vermak_core::traits::{Autocomplete, MapView, PlacesService, ResultsList};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlInputElement};

/// Invoked with a result index when a marker or row is clicked.
pub type Select = Rc<dyn Fn(usize)>;

fn log_js_error(context: &str, err: JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), &err);
}

#[derive(Serialize)]
struct MarkerOptions {
    position: LatLng,
    icon: String,
}

struct LiveMarker {
    marker: Marker,
    /// Cleared on teardown so a pending drop does not re-attach the marker.
    live: Rc<Cell<bool>>,
    _on_click: Closure<dyn FnMut()>,
}

pub struct BrowserMap {
    map: GMap,
    info_window: InfoWindow,
    panel: InfoPanel,
    /// Slot `i` holds the marker of placement `i`; `None` where creation failed.
    markers: Vec<Option<LiveMarker>>,
    select: Select,
}

impl BrowserMap {
    pub fn new(map: GMap, panel: InfoPanel, select: Select) -> Result<Self, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"content".into(), &panel.root)?;
        Ok(Self {
            info_window: InfoWindow::new(&options),
            map,
            panel,
            markers: Vec::new(),
            select,
        })
    }

    pub fn handle(&self) -> &GMap {
        &self.map
    }

    fn create_marker(&self, entry: &MarkerEntry) -> Result<LiveMarker, JsValue> {
        let options = to_js(&MarkerOptions {
            position: entry.position,
            icon: entry.icon.clone(),
        })?;
        js_sys::Reflect::set(&options, &"animation".into(), &bindings::drop_animation())?;
        let marker = Marker::new(&options);

        let select = self.select.clone();
        let index = entry.index;
        let on_click = Closure::<dyn FnMut()>::new(move || select(index));
        bindings::add_listener(&marker, "click", on_click.as_ref());

        let live = Rc::new(Cell::new(true));
        let attach = {
            let (marker, map, live) = (marker.clone(), self.map.clone(), live.clone());
            Closure::once_into_js(move || {
                if live.get() {
                    marker.set_map(&map);
                }
            })
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let delay = i32::try_from(entry.drop_delay.as_millis()).unwrap_or(i32::MAX);
        window.set_timeout_with_callback_and_timeout_and_arguments_0(attach.unchecked_ref(), delay)?;

        Ok(LiveMarker {
            marker,
            live,
            _on_click: on_click,
        })
    }
}

impl MapView for BrowserMap {
    fn pan_to(&mut self, center: LatLng) {
        match to_js(&center) {
            Ok(c) => self.map.pan_to(&c),
            Err(e) => log_js_error("pan_to", e),
        }
    }

    fn set_center(&mut self, center: LatLng) {
        match to_js(&center) {
            Ok(c) => self.map.set_center(&c),
            Err(e) => log_js_error("set_center", e),
        }
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.map.set_zoom(zoom);
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.map
            .get_bounds()
            .and_then(|b| convert::from_js(&b.to_json()))
    }

    fn add_marker(&mut self, marker: &MarkerEntry) {
        let live = self
            .create_marker(marker)
            .map_err(|e| log_js_error("add_marker", e))
            .ok();
        put_slot(&mut self.markers, marker.index, live);
    }

    fn clear_markers(&mut self) {
        self.info_window.close();
        for m in self.markers.drain(..).flatten() {
            m.live.set(false);
            m.marker.set_map(&JsValue::NULL);
            bindings::clear_instance_listeners(&m.marker);
        }
    }

    fn open_info(&mut self, anchor: usize, content: &InfoContent) {
        let Some(live) = self.markers.get(anchor).and_then(Option::as_ref) else {
            return;
        };
        if let Err(e) = self.panel.render(content) {
            log_js_error("info panel", e);
            return;
        }
        self.info_window.open(&self.map, &live.marker);
    }
}

/// Stores `item` at `index`, padding any gap with empty slots.
fn put_slot<T>(slots: &mut Vec<Option<T>>, index: usize, item: Option<T>) {
    if slots.len() <= index {
        slots.resize_with(index + 1, || None);
    }
    slots[index] = item;
}

#[derive(Serialize)]
struct ComponentRestrictions<'a> {
    country: &'a [String],
}

pub struct BrowserAutocomplete {
    input: HtmlInputElement,
    inner: Option<bindings::Autocomplete>,
}

impl BrowserAutocomplete {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input, inner: None }
    }

    /// The provider widget, once bound.
    pub fn handle(&self) -> Option<&bindings::Autocomplete> {
        self.inner.as_ref()
    }
}

impl Autocomplete for BrowserAutocomplete {
    fn bind(&mut self, options: &AutocompleteOptions) {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Widget<'a> {
            types: &'a [String],
            strict_bounds: bool,
        }

        let widget = match to_js(&Widget {
            types: &options.types,
            strict_bounds: options.strict_bounds,
        }) {
            Ok(w) => w,
            Err(e) => return log_js_error("autocomplete options", e),
        };
        let inner = bindings::Autocomplete::new(&self.input, &widget);
        if let Some(bounds) = &options.bounds {
            match to_js(bounds) {
                Ok(b) => inner.set_bounds(&b),
                Err(e) => log_js_error("autocomplete bounds", e),
            }
        }
        self.inner = Some(inner);
    }

    fn set_country_restriction(&mut self, countries: &[String]) {
        let Some(inner) = &self.inner else {
            return;
        };
        match to_js(&ComponentRestrictions { country: countries }) {
            Ok(r) => inner.set_component_restrictions(&r),
            Err(e) => log_js_error("component restrictions", e),
        }
    }

    fn prompt(&mut self, text: &str) {
        self.input.set_placeholder(text);
    }
}

pub struct BrowserResults {
    document: Document,
    body: HtmlElement,
    handlers: Vec<Closure<dyn FnMut()>>,
    select: Select,
}

impl BrowserResults {
    pub fn new(document: Document, body: HtmlElement, select: Select) -> Self {
        Self {
            document,
            body,
            handlers: Vec::new(),
            select,
        }
    }

    fn build_row(&mut self, row: &ResultRow) -> Result<(), JsValue> {
        let tr: HtmlElement = dom::create(&self.document, "tr")?;
        tr.style().set_property("background-color", row.stripe.color())?;

        let select = self.select.clone();
        let index = row.index;
        let on_click = Closure::<dyn FnMut()>::new(move || select(index));
        tr.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        self.handlers.push(on_click);

        let icon_td = self.document.create_element("td")?;
        let icon: HtmlImageElement = dom::create(&self.document, "img")?;
        icon.set_src(&row.icon);
        icon.set_class_name("placeIcon");
        icon_td.append_child(&icon)?;

        let name_td = self.document.create_element("td")?;
        name_td.append_child(&self.document.create_text_node(&row.name))?;

        tr.append_child(&icon_td)?;
        tr.append_child(&name_td)?;
        self.body.append_child(&tr)?;
        Ok(())
    }
}

impl ResultsList for BrowserResults {
    fn clear(&mut self) {
        if let Err(e) = dom::clear_children(&self.body) {
            log_js_error("clear results", e);
        }
        self.handlers.clear();
    }

    fn append_row(&mut self, row: &ResultRow) {
        if let Err(e) = self.build_row(row) {
            log_js_error("append row", e);
        }
    }
}

pub struct BrowserPlaces {
    service: bindings::PlacesService,
}

impl BrowserPlaces {
    pub fn new(map: &GMap) -> Self {
        Self {
            service: bindings::PlacesService::new(map),
        }
    }
}

impl PlacesService for BrowserPlaces {
    fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> LocalBoxFuture<'static, NearbySearchResponse> {
        let (tx, rx) = oneshot::channel();
        match to_js(request) {
            Ok(req) => {
                let callback = Closure::once_into_js(
                    move |results: JsValue, status: JsValue, _pagination: JsValue| {
                        let _ = tx.send(convert::nearby_response(&results, &status));
                    },
                );
                self.service.nearby_search(&req, &callback);
            }
            Err(e) => {
                log_js_error("nearby search request", e);
                let _ = tx.send(NearbySearchResponse::failed(PlacesStatus::InvalidRequest));
            }
        }
        rx.map(|r| r.unwrap_or_else(|_| NearbySearchResponse::failed(PlacesStatus::UnknownError)))
            .boxed_local()
    }

    fn place_details(&self, request: &DetailsRequest) -> LocalBoxFuture<'static, PlaceDetailsResponse> {
        let (tx, rx) = oneshot::channel();
        match to_js(request) {
            Ok(req) => {
                let callback = Closure::once_into_js(move |place: JsValue, status: JsValue| {
                    let _ = tx.send(convert::details_response(&place, &status));
                });
                self.service.get_details(&req, &callback);
            }
            Err(e) => {
                log_js_error("place details request", e);
                let _ = tx.send(PlaceDetailsResponse::failed(PlacesStatus::InvalidRequest));
            }
        }
        rx.map(|r| r.unwrap_or_else(|_| PlaceDetailsResponse::failed(PlacesStatus::UnknownError)))
            .boxed_local()
    }
}
