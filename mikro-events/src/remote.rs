use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{ConnectError, EventEntry, ServiceDescriptor};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    events: Vec<EventEntry>,
}

/// One login round trip against a remote service. A successful response body
/// carries the user's event list.
pub(crate) async fn connect(
    service: &ServiceDescriptor,
    username: &str,
    password: &str,
) -> Result<Vec<EventEntry>, ConnectError> {
    let base = Url::parse(service.url.trim_end_matches('/'))
        .map_err(|e| ConnectError::Response(format!("invalid service URL {}: {}", service.url, e)))?;
    let login_url = base
        .join("/api/login")
        .map_err(|e| ConnectError::Response(e.to_string()))?;

    let resp = Client::new()
        .post(login_url)
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .map_err(|e| ConnectError::Response(e.to_string()))?;

    if resp.status() == StatusCode::UNAUTHORIZED || resp.status() == StatusCode::FORBIDDEN {
        return Err(ConnectError::Unauthorized);
    }
    if !resp.status().is_success() {
        return Err(ConnectError::Response(format!(
            "{} returned {}",
            service.name,
            resp.status()
        )));
    }

    let body: LoginResponse = resp
        .json()
        .await
        .map_err(|e| ConnectError::Parse(e.to_string()))?;

    Ok(body.events)
}
