//! HTTP layer over the browser Fetch API.
//!
//! All requests go through [`race_with_timeout`] so a stalled gateway can
//! never hang the UI. Responses use the API's `{ "data": ... }` envelope;
//! error bodies carry `{ "error": "message" }`.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{API_BASE_URL, FETCH_TIMEOUT_MS};
use crate::core::error::ApiError;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("window not available".to_string());
    };

    // Timeout branch resolves to undefined, which the fetch branch never does
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "unknown error".to_string())),
    }
}

// =============================================================================
// Request Execution
// =============================================================================

/// Standard success envelope of the monitoring API.
#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Standard error envelope.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Execute a request and return the response body as text.
///
/// Non-2xx responses become [`ApiError::Http`], with the server message
/// extracted from the error envelope when present.
async fn execute(method: &str, path: &str, body: Option<String>, bearer: Option<&str>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", API_BASE_URL, path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    let headers = request.headers();
    let _ = headers.set("Accept", "application/json");
    if method != "GET" {
        let _ = headers.set("Content-Type", "application/json");
    }
    if let Some(token) = bearer {
        let _ = headers.set("Authorization", &format!("Bearer {}", token));
    }

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| ApiError::InvalidContent)?;

            let text = JsFuture::from(resp.text().map_err(|_| ApiError::ResponseRead)?)
                .await
                .map_err(|_| ApiError::ResponseRead)?
                .as_string()
                .ok_or(ApiError::InvalidContent)?;

            if !resp.ok() {
                let message = serde_json::from_str::<ErrorEnvelope>(&text)
                    .ok()
                    .map(|e| e.error);
                return Err(ApiError::Http {
                    status: resp.status(),
                    message,
                });
            }

            Ok(text)
        }
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(|e| e.data)
        .map_err(|e| ApiError::JsonParse(e.to_string()))
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str, bearer: Option<&str>) -> Result<T, ApiError> {
    let text = execute("GET", path, None, bearer).await?;
    decode(&text)
}

/// POST a JSON body and decode the enveloped response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::JsonParse(e.to_string()))?;
    let text = execute("POST", path, Some(body), bearer).await?;
    decode(&text)
}

/// POST a JSON body, ignoring the response payload.
pub async fn post_accepted<B: Serialize>(
    path: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::JsonParse(e.to_string()))?;
    execute("POST", path, Some(body), bearer).await?;
    Ok(())
}

/// POST without a body, ignoring the response payload.
pub async fn post_empty(path: &str, bearer: Option<&str>) -> Result<(), ApiError> {
    execute("POST", path, None, bearer).await?;
    Ok(())
}

/// GET a resource and only check it answers 2xx.
pub async fn get_ok(path: &str) -> Result<(), ApiError> {
    execute("GET", path, None, None).await?;
    Ok(())
}
