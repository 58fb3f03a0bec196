//! Report orchestration.
//!
//! Two pipelines, one per service, run strictly in sequence: the Beehiiv
//! pipeline does not start until the ActiveCampaign pipeline has fully
//! completed. Each pipeline lists a resource, fans out one concurrent
//! detail fetch per listed item, waits for all of them (fail-fast, no
//! partial results), and writes one summary line per resolved detail.
//!
//! Lines go through a caller-supplied writer; the CLI passes stdout.

use std::io::Write;

use futures_util::future::try_join_all;
use tracing::info;

use crate::api::{ActiveCampaignApi, BeehiivApi};
use crate::error::{ReportError, Result};
use crate::models::{CampaignDetails, MessageDetails, PublicationDetails};

fn message_line(details: &MessageDetails) -> String {
    format!(
        "[ActiveCampaign] - id {}, from {}, subject \"{}\"",
        details.id, details.fromname, details.subject
    )
}

fn campaign_line(details: &CampaignDetails) -> String {
    format!(
        "[ActiveCampaign] Timestamp {}, opens {}, unsubscribes {}",
        details.created_timestamp, details.uniqueopens, details.unsubscribes
    )
}

fn publication_line(details: &PublicationDetails) -> String {
    format!(
        "[Beehiiv] Publication id {}, total_sent {}, total_unique_opened {}",
        details.id, details.stats.total_sent, details.stats.total_unique_opened
    )
}

/// Run the ActiveCampaign pipeline: messages, then the first campaign.
pub async fn run_active_campaign<W: Write>(api: &ActiveCampaignApi, out: &mut W) -> Result<()> {
    writeln!(out, "[ActiveCampaign] Fetching all messages...")?;
    let messages = api.list_messages().await?;
    info!("Fetched {} messages", messages.len());

    // Joined results stay aligned with the message list regardless of
    // response arrival order.
    let details = try_join_all(messages.iter().map(|m| api.get_message(&m.id))).await?;
    for message in &details {
        writeln!(out, "{}", message_line(message))?;
    }

    writeln!(out, "[ActiveCampaign] Fetching all campaigns...")?;
    let campaigns = api.list_campaigns().await?;

    // First campaign by list position, no selection criterion beyond that.
    let first = campaigns
        .first()
        .ok_or_else(|| ReportError::NoDataApi("campaign list is empty".to_string()))?;

    writeln!(out, "[ActiveCampaign] Fetching campaign with id {}", first.id)?;
    let campaign = api.get_campaign(&first.id).await?;
    writeln!(out, "{}", campaign_line(&campaign))?;

    Ok(())
}

/// Run the Beehiiv pipeline: every publication with its stats.
pub async fn run_beehiiv<W: Write>(api: &BeehiivApi, out: &mut W) -> Result<()> {
    writeln!(out, "[Beehiiv] Listing publications...")?;
    let publications = api.list_publications().await?;
    info!("Fetched {} publications", publications.len());

    let details = try_join_all(publications.iter().map(|p| api.get_publication(&p.id))).await?;
    for publication in &details {
        writeln!(out, "{}", publication_line(publication))?;
    }

    Ok(())
}

/// Run both pipelines in sequence.
///
/// Any error aborts the run immediately; a failure in the ActiveCampaign
/// pipeline means the Beehiiv pipeline never issues a request.
pub async fn run<W: Write>(
    active_campaign: &ActiveCampaignApi,
    beehiiv: &BeehiivApi,
    out: &mut W,
) -> Result<()> {
    run_active_campaign(active_campaign, out).await?;
    run_beehiiv(beehiiv, out).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicationStats;

    #[test]
    fn test_message_line() {
        let details = MessageDetails {
            id: "m1".to_string(),
            subject: "Hi".to_string(),
            fromname: "Bob".to_string(),
            fromemail: "b@x.com".to_string(),
            text: "...".to_string(),
        };
        assert_eq!(
            message_line(&details),
            "[ActiveCampaign] - id m1, from Bob, subject \"Hi\""
        );
    }

    #[test]
    fn test_campaign_line() {
        let details = CampaignDetails {
            created_timestamp: "2024-01-01".to_string(),
            uniqueopens: "5".to_string(),
            unsubscribes: "1".to_string(),
        };
        assert_eq!(
            campaign_line(&details),
            "[ActiveCampaign] Timestamp 2024-01-01, opens 5, unsubscribes 1"
        );
    }

    #[test]
    fn test_publication_line() {
        let details = PublicationDetails {
            id: "pub_1".to_string(),
            stats: PublicationStats {
                total_sent: 100,
                total_unique_opened: 40,
            },
        };
        assert_eq!(
            publication_line(&details),
            "[Beehiiv] Publication id pub_1, total_sent 100, total_unique_opened 40"
        );
    }
}
