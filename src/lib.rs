//! # Campaign Report
//!
//! A small reporting library for two marketing-platform APIs:
//! ActiveCampaign (email campaigns) and Beehiiv (newsletter publications).
//! It lists a handful of resources from each service, fetches their
//! details concurrently, and writes human-readable summary lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campaign_report::{report, ActiveCampaignApi, BeehiivApi, ReportConfig, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReportConfig {
//!         active_campaign: ServiceConfig::new("https://acme.api-us1.com", "ac-key"),
//!         beehiiv: ServiceConfig::new("https://api.beehiiv.com/v2", "bh-key"),
//!     };
//!
//!     let active_campaign = ActiveCampaignApi::new(&config.active_campaign)?;
//!     let beehiiv = BeehiivApi::new(&config.beehiiv)?;
//!
//!     let mut stdout = std::io::stdout();
//!     report::run(&active_campaign, &beehiiv, &mut stdout).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - The two service pipelines run strictly in sequence.
//! - Detail fetches within a pipeline fan out concurrently and join
//!   fail-fast, with results aligned to the originating list order.
//! - There are no retries and no pagination; a failed call aborts the run.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

// Re-exports for convenience
pub use api::{ActiveCampaignApi, BeehiivApi};
pub use config::{ReportConfig, ServiceConfig};
pub use error::{ReportError, Result};
pub use models::{
    CampaignDetails, CampaignSummary, Message, MessageDetails, Publication, PublicationDetails,
    PublicationStats,
};
