// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: maps the four collection calls onto HTTP and reports
// raw failures. Classification happens in the viewmodels.
// ============================================================================

use async_trait::async_trait;

use crate::models::{Record, RecordPayload, RollNumber};
use crate::services::error::TransportError;

/// Remote record store, addressed relative to one collection endpoint
#[async_trait(?Send)]
pub trait RecordTransport {
    fn base_url(&self) -> &str;

    /// GET /
    async fn list_records(&self) -> Result<Vec<Record>, TransportError>;
    /// POST /
    async fn create_record(&self, payload: &RecordPayload) -> Result<(), TransportError>;
    /// PUT /{id}
    async fn update_record(&self, id: RollNumber, payload: &RecordPayload) -> Result<(), TransportError>;
    /// DELETE /{id}
    async fn delete_record(&self, id: RollNumber) -> Result<(), TransportError>;
}

pub fn collection_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

pub fn record_url(base_url: &str, id: RollNumber) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}

/// Non-2xx response; a blank body carries no remote detail
pub fn http_failure(status: u16, body: Option<String>) -> TransportError {
    TransportError::Http {
        status,
        body: body.filter(|text| !text.trim().is_empty()),
    }
}

/// gloo-net client for the browser build
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.ok();
        Err(http_failure(status, body))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl RecordTransport for ApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_records(&self) -> Result<Vec<Record>, TransportError> {
        use gloo_net::http::Request;

        let url = collection_url(&self.base_url);
        log::debug!("📋 GET {}", url);
        let request = Request::get(&url)
            .header("Accept", "application/json")
            .build()
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        let response = Self::send(request).await?;
        response
            .json::<Vec<Record>>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn create_record(&self, payload: &RecordPayload) -> Result<(), TransportError> {
        use gloo_net::http::Request;

        let url = collection_url(&self.base_url);
        log::debug!("➕ POST {}", url);
        let request = Request::post(&url)
            .json(payload)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    async fn update_record(&self, id: RollNumber, payload: &RecordPayload) -> Result<(), TransportError> {
        use gloo_net::http::Request;

        let url = record_url(&self.base_url, id);
        log::debug!("✏️ PUT {}", url);
        let request = Request::put(&url)
            .json(payload)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    async fn delete_record(&self, id: RollNumber) -> Result<(), TransportError> {
        use gloo_net::http::Request;

        let url = record_url(&self.base_url, id);
        log::debug!("🗑️ DELETE {}", url);
        let request = Request::delete(&url)
            .build()
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_relative_to_collection_endpoint() {
        let base = "http://localhost:8080/student";
        assert_eq!(collection_url(base), "http://localhost:8080/student");
        assert_eq!(collection_url("http://h/student/"), "http://h/student");
        assert_eq!(record_url(base, RollNumber(42)), "http://localhost:8080/student/42");
        assert_eq!(record_url("http://h/student/", RollNumber(1)), "http://h/student/1");
    }

    #[test]
    fn non_success_keeps_status_and_drops_blank_body() {
        assert_eq!(
            http_failure(500, Some("  \n".into())),
            TransportError::Http { status: 500, body: None }
        );
        assert_eq!(http_failure(404, None), TransportError::Http { status: 404, body: None });

        let error = http_failure(400, Some(r#"{"message":"Email already used"}"#.into()));
        assert_eq!(
            error,
            TransportError::Http {
                status: 400,
                body: Some(r#"{"message":"Email already used"}"#.into()),
            }
        );
        assert!(!error.is_connectivity());
        assert_eq!(error.to_string(), "Request failed with status code 400");
    }
}
