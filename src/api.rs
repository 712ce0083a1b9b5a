//! Panel API calls used by the front end.

use frostpanel_core::ApiError;
use frostpanel_core::api::{
    FractalList, FractalObject, ResourceAttributes, ServerAttributes, ServerResponse,
    server_resources_url, server_url,
};
use frostpanel_core::login::{LOGIN_URL, LOGOUT_URL, LoginRequest, LoginResponse};
use frostpanel_core::search::{SearchScope, search_query, servers_url};
use frostpanel_core::server::{Server, ServerStats};

use crate::utils::http;

/// End the session.
pub async fn logout() -> Result<(), ApiError> {
    http::post_empty(LOGOUT_URL).await
}

/// Submit credentials.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    http::post_json(LOGIN_URL, request).await
}

/// Load one server together with the caller's permissions on it.
pub async fn get_server(id: &str) -> Result<Server, ApiError> {
    let response: ServerResponse = http::get_json(&server_url(id), &[]).await?;
    Ok(response.into())
}

/// Current power state and resource usage of a server.
pub async fn get_server_resource_usage(uuid: &str) -> Result<ServerStats, ApiError> {
    let object: FractalObject<ResourceAttributes> =
        http::get_json(&server_resources_url(uuid), &[]).await?;
    Ok(object.attributes.into())
}

/// Servers visible to the user, optionally filtered by `query`.
pub async fn get_servers(query: Option<&str>, scope: SearchScope) -> Result<Vec<Server>, ApiError> {
    let params = match query {
        Some(term) => search_query(term, scope),
        None => Vec::new(),
    };
    let list: FractalList<ServerAttributes> = http::get_json(servers_url(), &params).await?;
    Ok(list.into_servers())
}
