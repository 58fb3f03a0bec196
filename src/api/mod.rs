//! API clients for the two marketing services.
//!
//! - [`ActiveCampaignApi`] - ActiveCampaign v3 REST API (email campaigns)
//! - [`BeehiivApi`] - Beehiiv v2 REST API (newsletter publications)

pub mod activecampaign;
pub mod beehiiv;

pub use activecampaign::ActiveCampaignApi;
pub use beehiiv::BeehiivApi;
