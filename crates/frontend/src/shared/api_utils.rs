//! API utilities for frontend-backend communication
//!
//! Every request carries the CSRF header. Transport failures come back as
//! `Err(String)`; anything the server actually answered is decoded into an
//! [`ApiOutcome`].

use super::config::ClientConfig;
use super::csrf::read_cookie;
use contracts::shared::api::ApiOutcome;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/chat/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", ClientConfig::get().api_base, path)
}

fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
    let config = ClientConfig::get();
    match read_cookie(&config.csrf_cookie) {
        Some(token) => builder.header(&config.csrf_header, &token),
        None => {
            log::warn!("⚠️ {} cookie not found, sending request without it", config.csrf_cookie);
            builder
        }
    }
}

/// Status and text body of a finished request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<ApiOutcome<T>, String> {
        ApiOutcome::decode(self.status, &self.body).map_err(|e| e.to_string())
    }
}

async fn read_text(response: Response) -> Result<RawResponse, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ok(RawResponse { status, body })
}

/// POST a JSON body and decode the answer.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<ApiOutcome<T>, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::info!("➡️ POST {}", url);
    let response = with_csrf(Request::post(&url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_text(response).await?.decode()
}

/// POST multipart form data and decode the answer.
pub async fn post_form<T>(path: &str, form: FormData) -> Result<ApiOutcome<T>, String>
where
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::info!("➡️ POST {} (multipart)", url);
    let response = with_csrf(Request::post(&url))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_text(response).await?.decode()
}

/// GET without decoding; the caller inspects headers first.
pub async fn get_raw(path: &str) -> Result<Response, String> {
    let url = api_url(path);
    log::info!("➡️ GET {}", url);
    with_csrf(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

/// Multipart form with a single file under `field`.
pub fn file_form(field: &str, file: &web_sys::File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob(field, file)
        .map_err(|e| format!("{e:?}"))?;
    Ok(form)
}
