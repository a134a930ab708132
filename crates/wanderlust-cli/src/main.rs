mod places;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wanderlust_places::{PlacesService, ProviderConfig, DEFAULT_NEARBY_RADIUS, DEFAULT_NEARBY_TYPE};

#[derive(Debug, Parser)]
#[command(name = "wanderlust-cli")]
#[command(about = "Wanderlust place lookups from the command line")]
struct Cli {
    /// Never contact the places provider, even when a key is configured
    #[arg(long, global = true)]
    mock: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search destinations by free text
    Search {
        query: String,
        /// Maximum number of results (1-60)
        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..=60))]
        limit: u16,
    },
    /// List popular destinations
    Popular {
        /// Maximum number of results (1-60)
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u16).range(1..=60))]
        limit: u16,
    },
    /// Show full detail for one place
    Details { place_id: String },
    /// Find places around a coordinate
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Provider place type (e.g., restaurant)
        #[arg(long = "type", default_value = DEFAULT_NEARBY_TYPE)]
        place_type: String,
        /// Search radius in metres
        #[arg(long, default_value_t = DEFAULT_NEARBY_RADIUS)]
        radius: u32,
    },
    /// Resolve an address to coordinates
    Geocode { address: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = wanderlust_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let service = if cli.mock {
        PlacesService::mock()
    } else {
        PlacesService::new(&ProviderConfig::from_app_config(&config))?
    };

    let output = places::execute(&service, cli.command).await?;
    println!("{output}");
    Ok(())
}
