use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::constants::NETWORK_ERROR;

use crate::config::get_api_base_url;
use crate::identity::get_admin_token;

/// Failure of a single API call. Status 0 means the request never got a
/// response (network failure, unreadable body).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn network() -> Self {
        Self {
            status: 0,
            message: NETWORK_ERROR.to_string(),
        }
    }

    /// 401/403 from an admin call: the stored token is no longer valid and
    /// the operator has to re-authenticate.
    pub fn is_auth(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn url_for(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

// Failures arrive as a non-2xx body carrying {detail} or {message}.
async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("detail")
            .and_then(|v| v.as_str())
            .or_else(|| body.get("message").and_then(|v| v.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed: {status}")),
        Err(_) => format!("Request failed: {status}"),
    };
    ApiError { status, message }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::error!("error parsing response: {e:?}");
        ApiError::network()
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url_for(path))
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    parse_json(response).await
}

pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::post(&url_for(path))
        .json(body)
        .map_err(|_| ApiError::network())?
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    parse_json(response).await
}

fn bearer() -> Result<String, ApiError> {
    match get_admin_token() {
        Some(token) => Ok(format!("Bearer {token}")),
        None => Err(ApiError {
            status: 401,
            message: "No admin token found".to_string(),
        }),
    }
}

pub async fn admin_get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url_for(path))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    parse_json(response).await
}

pub async fn admin_post<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::post(&url_for(path))
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|_| ApiError::network())?
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    parse_json(response).await
}

pub async fn admin_put<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::put(&url_for(path))
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|_| ApiError::network())?
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    parse_json(response).await
}

pub async fn admin_delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&url_for(path))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|_| ApiError::network())?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}
