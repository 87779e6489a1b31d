use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use shared::ErrorResponse;

use crate::config::Config;

fn bearer(session_id: &str) -> String {
    format!("Bearer {}", session_id)
}

/// Attaches the stored session id as a bearer token
fn with_session(req: RequestBuilder) -> RequestBuilder {
    match LocalStorage::get::<String>(Config::SESSION_STORAGE_KEY) {
        Ok(session_id) => req.header("Authorization", &bearer(&session_id)),
        Err(_) => req,
    }
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    with_session(Request::get(url))
}

/// Used for logout
pub fn authenticated_post(url: &str) -> RequestBuilder {
    with_session(Request::post(url))
}

/// Used for the profile updates
pub fn authenticated_put(url: &str) -> RequestBuilder {
    with_session(Request::put(url))
}

/// Pulls the service's error message out of a failed response
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    }
}
