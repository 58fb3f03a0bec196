//! Data models for the remote API responses.
//!
//! Every type here is a transient, read-only shape decoded straight from
//! a JSON response; nothing is mutated or persisted.

pub mod campaign;
pub mod message;
pub mod publication;

// Re-exports for convenience
pub use campaign::{CampaignDetails, CampaignSummary};
pub use message::{Message, MessageDetails};
pub use publication::{Publication, PublicationDetails, PublicationStats};
