//! Backend HTTP API
//!
//! A two-method JSON helper over `window.fetch`, plus per-endpoint
//! wrappers organized by domain.

mod task;
mod submission;
mod gallery;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub use task::*;
pub use submission::*;
pub use gallery::*;

/// Any way a request can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    /// No response was received
    #[error("request failed: {0}")]
    Transport(String),
    /// The request body could not be serialized
    #[error("invalid request body: {0}")]
    Encode(String),
    /// The response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        RequestError::Transport(message)
    }
}

/// `GET url`, returning the parsed JSON body
pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, RequestError> {
    send("GET", url, None).await
}

/// `POST url` with `body` as JSON, returning the parsed JSON body
pub async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, RequestError> {
    send("POST", url, Some(encode(body)?)).await
}

async fn send<T: DeserializeOwned>(method: &str, url: &str, body: Option<String>) -> Result<T, RequestError> {
    let headers = Headers::new().map_err(RequestError::from_js)?;
    headers.set("Content-Type", "application/json").map_err(RequestError::from_js)?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(&headers);
    if let Some(json) = body {
        init.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(RequestError::from_js)?;
    let window = web_sys::window().ok_or_else(|| RequestError::Transport("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(RequestError::from_js)?
        .dyn_into()
        .map_err(RequestError::from_js)?;
    check_status(response.status())?;

    let text = JsFuture::from(response.text().map_err(RequestError::from_js)?)
        .await
        .map_err(RequestError::from_js)?
        .as_string()
        .unwrap_or_default();
    decode(&text)
}

fn check_status(status: u16) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestError::Status { status })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, RequestError> {
    serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))
}

/// An empty body (e.g. `204 No Content`) decodes as JSON `null`
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Join the configured base with an endpoint path
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    #[case(299)]
    fn test_success_statuses(#[case] status: u16) {
        assert_eq!(check_status(status), Ok(()));
    }

    #[rstest]
    #[case(199)]
    #[case(301)]
    #[case(404)]
    #[case(500)]
    fn test_failure_statuses_carry_status(#[case] status: u16) {
        assert_eq!(check_status(status), Err(RequestError::Status { status }));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(RequestError::Status { status: 500 }.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_decode_bad_body() {
        let result: Result<crate::models::Task, _> = decode("<html>oops</html>");
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_empty_success_body_decodes_as_null() {
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(decode::<()>(""), Ok(()));
        assert_eq!(decode::<Option<serde_json::Value>>("  \n"), Ok(None));
    }

    #[test]
    fn test_empty_body_for_required_fields_is_decode_error() {
        let result: Result<crate::models::VoteCount, _> = decode("");
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_unserializable_body_is_encode_error() {
        use std::collections::HashMap;
        // JSON object keys must be strings
        let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let result = encode(&body);
        assert!(matches!(result, Err(RequestError::Encode(_))));
        assert!(result.unwrap_err().to_string().starts_with("invalid request body"));
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("/api", "gallery"), "/api/gallery");
        assert_eq!(endpoint("/api/", "/gallery"), "/api/gallery");
        assert_eq!(endpoint("https://example.org/api", "get-task"), "https://example.org/api/get-task");
    }
}
