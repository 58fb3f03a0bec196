//! Campaign models from the ActiveCampaign API.

use serde::Deserialize;

/// One entry of the campaign list.
///
/// Only the ID is consumed; the report fetches details for the first
/// campaign by list position.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CampaignSummary {
    /// Campaign ID.
    pub id: String,
}

/// Summary statistics of a single campaign.
///
/// ActiveCampaign serializes the counters as strings, so they are kept
/// as strings here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CampaignDetails {
    /// Creation timestamp as reported by the API.
    pub created_timestamp: String,

    /// Number of unique opens.
    pub uniqueopens: String,

    /// Number of unsubscribes.
    pub unsubscribes: String,
}
