//! Command handlers. Each one calls a single `PlacesService` operation and
//! renders the result as pretty-printed JSON.

use serde::Serialize;
use wanderlust_places::PlacesService;

use crate::Commands;

/// Runs `command` against `service` and returns the rendered output.
///
/// # Errors
///
/// Returns an error when a details or geocode lookup comes back empty, or if
/// the result cannot be serialized.
pub(crate) async fn execute(service: &PlacesService, command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Search { query, limit } => {
            let results = service.search(&query, usize::from(limit)).await;
            tracing::debug!(query, count = results.len(), "search finished");
            render(&results)
        }
        Commands::Popular { limit } => {
            render(&service.popular_destinations(usize::from(limit)).await)
        }
        Commands::Details { place_id } => match service.get_details(&place_id).await {
            Some(detail) => render(&detail),
            None => anyhow::bail!("place not found: {place_id}"),
        },
        Commands::Nearby {
            lat,
            lng,
            place_type,
            radius,
        } => render(&service.find_nearby(lat, lng, &place_type, radius).await),
        Commands::Geocode { address } => match service.geocode(&address).await {
            Some(result) => render(&result),
            None => anyhow::bail!("address not found: {address}"),
        },
    }
}

fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
