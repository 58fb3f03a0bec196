//! Beehiiv API client.
//!
//! Authenticates with a standard `Authorization: Bearer` header and
//! consumes the read-only publication endpoints. Only the first page of
//! the publication list is considered.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{ReportError, Result};
use crate::models::{Publication, PublicationDetails};

/// Beehiiv API client.
///
/// # Example
///
/// ```rust,no_run
/// use campaign_report::{BeehiivApi, ServiceConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServiceConfig::new("https://api.beehiiv.com/v2", "secret");
///     let api = BeehiivApi::new(&config)?;
///     for publication in api.list_publications().await? {
///         println!("{}", publication.id);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BeehiivApi {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Beehiiv wraps every response payload in a `data` envelope.
#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

impl BeehiivApi {
    /// Create a new Beehiiv API client.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ReportError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Make an authenticated GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json_with_params(path, &[]).await
    }

    /// Make an authenticated GET request with query parameters.
    async fn get_json_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::HttpStatus { status, url });
        }

        Ok(response.json().await?)
    }

    /// List all publications (first page only).
    pub async fn list_publications(&self) -> Result<Vec<Publication>> {
        let response: DataResponse<Vec<Publication>> = self.get_json("publications").await?;
        Ok(response.data)
    }

    /// Get a single publication with its statistics expanded.
    pub async fn get_publication(&self, publication_id: &str) -> Result<PublicationDetails> {
        let response: DataResponse<PublicationDetails> = self
            .get_json_with_params(
                &format!("publications/{}", publication_id),
                &[("expand", "stats")],
            )
            .await?;
        Ok(response.data)
    }
}
