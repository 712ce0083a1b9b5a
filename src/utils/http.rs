//! HTTP helpers for the panel API.
//!
//! Every request carries the JSON `Accept` header, `X-Requested-With` and the
//! page's CSRF token. Non-2xx responses become [`ApiError::from_response`].

use frostpanel_core::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::utils::dom;

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest");
    match dom::csrf_token() {
        Some(token) => builder.header("X-CSRF-TOKEN", &token),
        None => builder,
    }
}

fn network(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET url?query` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = prepare(Request::get(url))
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

/// `POST url` with a JSON body and decode the JSON answer.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = prepare(Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    decode(response).await
}

/// `POST url` without a body, ignoring the answer.
pub async fn post_empty(url: &str) -> Result<(), ApiError> {
    let response = prepare(Request::post(url))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}
