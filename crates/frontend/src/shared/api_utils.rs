//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Network failures are reported as `Err(String)` so call sites can turn
//! them into user-visible state instead of aborting the wizard.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 7074 for the registration backend.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:7074", protocol, hostname)
}

/// Build a full API URL from a path like "/api/registration/123".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn response_text(resp: &Response) -> Result<String, String> {
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    resp_value.dyn_into().map_err(|e| format!("{e:?}"))
}

/// GET `path` and deserialize the JSON response body.
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = send(&request).await?;
    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST or PUT a multipart body to `path`. The browser sets the
/// `Content-Type` boundary itself; never set it by hand. On a non-2xx
/// response the backend's body (its validation message) is the error.
pub async fn send_multipart(method: &str, path: &str, form: &FormData) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;

    let resp = send(&request).await?;
    if !resp.ok() {
        let body = response_text(&resp).await.unwrap_or_default();
        if body.is_empty() {
            return Err(format!("HTTP {}", resp.status()));
        }
        return Err(body);
    }
    Ok(())
}

/// DELETE `path`.
pub async fn delete(path: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;

    let resp = send(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
