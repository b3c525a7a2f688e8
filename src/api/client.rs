use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::api::error::ApiError;
use crate::api::types::{normalize_list_response, Medicine, MedicineDraft, UserProfile};
use crate::config::ApiConfig;

/// HTTP client for the inventory service.
///
/// Mutation responses carry the created/updated record, but the caller
/// never uses it (consistency comes from the follow-up re-fetch), so
/// the mutating methods return `()`.
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// Fetch the full medicine list, normalized to a plain vector.
    pub async fn list_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        let resp = self.request(Method::GET, "/medicines").send().await?;
        let resp = check_status(resp).await?;
        let value = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(normalize_list_response(value))
    }

    pub async fn create_medicine(&self, draft: &MedicineDraft) -> Result<(), ApiError> {
        let resp = self
            .request(Method::POST, "/medicines")
            .json(draft)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn update_medicine(&self, id: i64, draft: &MedicineDraft) -> Result<(), ApiError> {
        let resp = self
            .request(Method::PUT, &format!("/medicines/{}", id))
            .json(draft)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn delete_medicine(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, &format!("/medicines/{}", id))
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    /// Identity query for the greeting header.
    ///
    /// Any failure (network, auth, shape) is treated as an absent
    /// profile rather than an error; the view falls back to a generic
    /// owner label.
    pub async fn current_user(&self) -> Option<UserProfile> {
        let resp = self.request(Method::GET, "/me").send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.bytes().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "inventory service returned an error");
    Err(ApiError::from_status(status, &body))
}
