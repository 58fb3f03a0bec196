//! ActiveCampaign API client.
//!
//! Authenticates with a static `Api-Token` header and consumes the
//! read-only v3 REST endpoints under `{base}/api/3/`. Only the first
//! page of any list endpoint is considered.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{ReportError, Result};
use crate::models::{CampaignDetails, CampaignSummary, Message, MessageDetails};

/// Header carrying the ActiveCampaign API key.
const API_TOKEN_HEADER: &str = "Api-Token";

/// ActiveCampaign API client.
///
/// # Example
///
/// ```rust,no_run
/// use campaign_report::{ActiveCampaignApi, ServiceConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServiceConfig::new("https://acme.api-us1.com", "secret");
///     let api = ActiveCampaignApi::new(&config)?;
///     for message in api.list_messages().await? {
///         println!("{}: {}", message.id, message.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ActiveCampaignApi {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: MessageDetails,
}

#[derive(Debug, Deserialize)]
struct CampaignsResponse {
    campaigns: Vec<CampaignSummary>,
}

#[derive(Debug, Deserialize)]
struct CampaignResponse {
    campaign: CampaignDetails,
}

impl ActiveCampaignApi {
    /// Create a new ActiveCampaign API client.
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

    /// Build the absolute URL for a v3 API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/3/{}", self.base_url, path)
    }

    /// Make an authenticated GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_TOKEN_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::HttpStatus { status, url });
        }

        Ok(response.json().await?)
    }

    /// List all messages (first page only).
    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let response: MessagesResponse = self.get_json("messages").await?;
        Ok(response.messages)
    }

    /// Get the details of a single message.
    pub async fn get_message(&self, message_id: &str) -> Result<MessageDetails> {
        let response: MessageResponse = self.get_json(&format!("messages/{}", message_id)).await?;
        Ok(response.message)
    }

    /// List all campaigns (first page only).
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>> {
        let response: CampaignsResponse = self.get_json("campaigns").await?;
        Ok(response.campaigns)
    }

    /// Get the summary statistics of a single campaign.
    pub async fn get_campaign(&self, campaign_id: &str) -> Result<CampaignDetails> {
        let response: CampaignResponse = self
            .get_json(&format!("campaigns/{}", campaign_id))
            .await?;
        Ok(response.campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_generation() {
        let config = ServiceConfig::new("https://acme.api-us1.com", "secret");
        let api = ActiveCampaignApi::new(&config).unwrap();
        assert_eq!(
            api.endpoint("messages/42"),
            "https://acme.api-us1.com/api/3/messages/42"
        );
    }
}
