//! Backend HTTP Bindings
//!
//! `fetch` wrappers for the travel backend, organized by domain.

mod itinerary;
mod tracking;
mod weather;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::browser;
use crate::error::ApiError;

// Re-export all public items
pub use itinerary::*;
pub use tracking::*;
pub use weather::*;

/// Status, redirect info and body text of a completed request
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub redirected: bool,
    pub url: String,
    pub body: String,
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let win = browser::window()?;
    let value = JsFuture::from(win.fetch_with_request(request)).await?;
    Ok(value.dyn_into::<Response>()?)
}

/// GET a JSON document; non-2xx statuses are errors
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Accept", "application/json")?;

    let response = send(&request).await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let json = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

/// POST a form-encoded body and hand back the raw response
pub(crate) async fn post_form(url: &str, body: &str) -> Result<RawResponse, ApiError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&body.into());
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/x-www-form-urlencoded")?;

    let response = send(&request).await?;
    let text = JsFuture::from(response.text()?).await?;
    Ok(RawResponse {
        status: response.status(),
        redirected: response.redirected(),
        url: response.url(),
        body: text.as_string().unwrap_or_default(),
    })
}
