//! Bindings to the Google Maps JavaScript Places library. The host page is
//! expected to load the Maps script with `libraries=places` and
//! `callback=initGoogleReviewsCallback`; without it reviews fall back to
//! the static testimonials.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use yew::Callback;

use crate::config;
use crate::error::{Result, SiteError};
use crate::reviews::{self, DetailsRequest, PlaceDetails, ReviewsView};
use crate::utils::dom;

#[wasm_bindgen]
extern "C" {
    type PlacesService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
    fn new(attributions: &web_sys::HtmlElement) -> PlacesService;

    #[wasm_bindgen(method, js_name = getDetails)]
    fn get_details(this: &PlacesService, request: &JsValue, callback: &JsValue);
}

/// Global names the Maps script loader calls back into.
pub const READY_CALLBACK: &str = "initGoogleReviewsCallback";
pub const ERROR_CALLBACK: &str = "handleGoogleApiError";

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// True once `google.maps.places` exists on the window.
pub fn places_loaded() -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    lookup(&window, "google")
        .and_then(|google| lookup(&google, "maps"))
        .and_then(|maps| lookup(&maps, "places"))
        .is_some()
}

fn decode(place: JsValue) -> Result<Option<PlaceDetails>> {
    if place.is_null() || place.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(place)
        .map(Some)
        .map_err(|err| SiteError::Decode(err.to_string()))
}

/// Requests the configured place's details and reports the resulting view
/// exactly once. Unconfigured or unavailable Places resolve to the fallback
/// synchronously.
pub fn load_reviews(on_done: Callback<ReviewsView>) {
    let place_id = config::place_id();
    if !config::is_place_configured(place_id) {
        on_done.emit(ReviewsView::from_result(Err(SiteError::PlaceNotConfigured)));
        return;
    }
    if !places_loaded() {
        on_done.emit(ReviewsView::from_result(Err(SiteError::PlacesUnavailable)));
        return;
    }

    // PlacesService wants a node for attributions; keep it out of the layout.
    let Some(container) = dom::document()
        .and_then(|doc| doc.create_element("div").ok())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        on_done.emit(ReviewsView::from_result(Err(SiteError::PlacesUnavailable)));
        return;
    };
    let _ = container.style().set_property("display", "none");
    if let Some(body) = dom::body() {
        let _ = body.append_child(&container);
    }

    let request = DetailsRequest {
        place_id,
        fields: &reviews::DETAIL_FIELDS,
    };
    let request = match serde_wasm_bindgen::to_value(&request) {
        Ok(request) => request,
        Err(err) => {
            on_done.emit(ReviewsView::from_result(Err(SiteError::Decode(err.to_string()))));
            return;
        }
    };

    let callback = Closure::once_into_js(move |place: JsValue, status: JsValue| {
        let status = status.as_string().unwrap_or_default();
        let result = decode(place).and_then(|place| reviews::resolve(&status, place));
        on_done.emit(ReviewsView::from_result(result));
    });

    log::info!("requesting Google reviews for {}", place_id);
    PlacesService::new(&container).get_details(&request, &callback);
}

/// Installs the two global hooks for the async Maps loader. They are
/// removed from `window` when the returned guard is dropped.
pub struct LoaderHooks {
    _ready: Closure<dyn Fn()>,
    _error: Closure<dyn Fn()>,
}

impl LoaderHooks {
    pub fn install(on_ready: Callback<()>, on_error: Callback<()>) -> Option<Self> {
        let window = dom::window()?;
        let ready = Closure::<dyn Fn()>::new(move || on_ready.emit(()));
        let error = Closure::<dyn Fn()>::new(move || on_error.emit(()));

        let set = |name: &str, f: &Function| Reflect::set(&window, &JsValue::from_str(name), f);
        if set(READY_CALLBACK, ready.as_ref().unchecked_ref()).is_err()
            || set(ERROR_CALLBACK, error.as_ref().unchecked_ref()).is_err()
        {
            log::warn!("could not expose Maps loader callbacks");
            return None;
        }
        Some(Self { _ready: ready, _error: error })
    }
}

impl Drop for LoaderHooks {
    fn drop(&mut self) {
        if let Some(window) = dom::window() {
            let _ = Reflect::delete_property(window.as_ref(), &JsValue::from_str(READY_CALLBACK));
            let _ = Reflect::delete_property(window.as_ref(), &JsValue::from_str(ERROR_CALLBACK));
        }
    }
}
