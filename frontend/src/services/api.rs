use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    DonationSubmission, ErrorResponse, HealthResponse, SubmitDonationResponse,
    GENERIC_ERROR_MESSAGE,
};

/// API client for the donation intake service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client for the service at `NOEL_API_BASE_URL` (set at build time),
    /// or the origin that served this page when unset
    pub fn new() -> Self {
        Self::with_base_url(option_env!("NOEL_API_BASE_URL").unwrap_or_default().to_string())
    }

    /// Client for a service on another origin, e.g. "http://localhost:3000" during development
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a donation. On failure the error is the message to show the donor.
    pub async fn submit_donation(&self, submission: &DonationSubmission) -> Result<SubmitDonationResponse, String> {
        let request = Request::post(&self.url("/api/donations"))
            .json(submission)
            .map_err(|e| {
                gloo::console::error!("Failed to serialize donation:", e.to_string());
                GENERIC_ERROR_MESSAGE.to_string()
            })?;

        match request.send().await {
            Ok(response) => Self::read_json(response).await,
            Err(e) => {
                gloo::console::error!("Network error while submitting donation:", e.to_string());
                Err(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// Test connection to the backend
    pub async fn health(&self) -> Result<HealthResponse, String> {
        self.get_json("/api/health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        match Request::get(&self.url(path)).send().await {
            Ok(response) => Self::read_json(response).await,
            Err(e) => {
                gloo::console::error!("Network error:", path, e.to_string());
                Err(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if response.ok() {
            return response.json::<T>().await.map_err(|e| {
                gloo::console::error!("Failed to parse response:", e.to_string());
                GENERIC_ERROR_MESSAGE.to_string()
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(ErrorResponse::message_from_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_is_same_origin() {
        let client = ApiClient::with_base_url(String::new());
        assert_eq!(client.url("/api/donations"), "/api/donations");
    }

    #[test]
    fn test_default_client_uses_build_time_base_url() {
        let expected = format!(
            "{}/api/logs",
            option_env!("NOEL_API_BASE_URL").unwrap_or_default().trim_end_matches('/')
        );
        assert_eq!(ApiClient::new().url("/api/logs"), expected);
        assert!(ApiClient::default() == ApiClient::new());
    }

    #[test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("http://localhost:3000/".to_string());
        assert_eq!(client.url("/api/stats"), "http://localhost:3000/api/stats");
    }
}
