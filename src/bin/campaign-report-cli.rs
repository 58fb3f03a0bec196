use campaign_report::{report, ActiveCampaignApi, BeehiivApi, ReportConfig, ServiceConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campaign-report")]
#[command(about = "Print a summary report from ActiveCampaign and Beehiiv", long_about = None)]
struct Cli {
    /// ActiveCampaign base URL (e.g. https://<account>.api-us1.com)
    #[arg(long, env = "ACTIVE_CAMPAIGN_API_URL")]
    active_campaign_api_url: String,

    /// ActiveCampaign API key
    #[arg(long, env = "ACTIVE_CAMPAIGN_API_KEY", hide_env_values = true)]
    active_campaign_api_key: String,

    /// Beehiiv base URL (e.g. https://api.beehiiv.com/v2)
    #[arg(long, env = "BEEHIIV_API_URL")]
    beehiiv_api_url: String,

    /// Beehiiv API key
    #[arg(long, env = "BEEHIIV_API_KEY", hide_env_values = true)]
    beehiiv_api_key: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "campaign_report=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = ReportConfig {
        active_campaign: ServiceConfig::new(
            cli.active_campaign_api_url,
            cli.active_campaign_api_key,
        ),
        beehiiv: ServiceConfig::new(cli.beehiiv_api_url, cli.beehiiv_api_key),
    };

    let active_campaign = ActiveCampaignApi::new(&config.active_campaign)?;
    let beehiiv = BeehiivApi::new(&config.beehiiv)?;

    let mut stdout = std::io::stdout();
    report::run(&active_campaign, &beehiiv, &mut stdout).await?;

    Ok(())
}
