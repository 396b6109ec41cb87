//! REST helpers for the election API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Helpers never interpret status codes. They hand back the status and body
//! text so each call site can classify its own outcome; only transport and
//! encoding failures surface as `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure to complete an HTTP exchange or to decode its body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Status and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Issue `GET endpoint`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body cannot be read.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn get(endpoint: &str) -> Result<HttpResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Issue `POST endpoint` with `payload` encoded as JSON.
///
/// # Errors
///
/// Returns an error if the payload cannot be encoded, the request cannot be
/// sent, or the body cannot be read.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn post_json<T: Serialize>(endpoint: &str, payload: &T) -> Result<HttpResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> Result<HttpResponse, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    log::debug!("{} {status}", resp.url());
    Ok(HttpResponse { status, body })
}
