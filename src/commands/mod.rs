//! Backend Commands
//!
//! Frontend bindings to the organizer's HTTP API, organized by domain.

mod moves;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::MoveError;
use crate::models::MoveResponse;

pub use moves::*;

/// Status and decoded body of a finished request
struct Reply {
    ok: bool,
    status: u16,
    body: Option<MoveResponse>,
}

/// POST a JSON body. Only transport failures are errors here; the caller
/// decides what a non-2xx status means.
async fn post_json(url: &str, body: &str) -> Result<Reply, MoveError> {
    let window = web_sys::window().ok_or(MoveError::Network("No window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let req = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| MoveError::Network(format!("{:?}", e)))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| MoveError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| MoveError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| MoveError::Network(format!("{:?}", e)))?;

    Ok(Reply {
        ok: resp.ok(),
        status: resp.status(),
        body: read_body(&resp).await,
    })
}

/// Responses are not guaranteed to carry JSON
async fn read_body(resp: &Response) -> Option<MoveResponse> {
    let promise = resp.json().ok()?;
    let json = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value(json).ok()
}
