//! Publication models from the Beehiiv API.

use serde::Deserialize;

/// One entry of the publication list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Publication {
    /// Publication ID.
    pub id: String,
}

/// A publication with its expanded statistics.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PublicationDetails {
    /// Publication ID.
    pub id: String,

    /// Aggregate statistics, present when requested with `expand=stats`.
    pub stats: PublicationStats,
}

/// Aggregate send statistics for a publication.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PublicationStats {
    /// Total number of emails sent.
    pub total_sent: u64,

    /// Total number of unique opens.
    pub total_unique_opened: u64,
}
