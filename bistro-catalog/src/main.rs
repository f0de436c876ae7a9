//! bistro-catalog runner
//!
//! Mounts the catalog against the configured API and logs what the
//! catalog section would show.

use bistro_catalog::logger::init_logger;
use bistro_catalog::{CatalogConfig, CatalogManager, CatalogView, TracingNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = CatalogConfig::from_env();
    init_logger(&config.log_level, config.log_json);

    tracing::info!(api_url = %config.api_url, "Starting bistro-catalog");

    let client = config.client_config().build_http_client()?;
    let manager = CatalogManager::new(client, TracingNotifier, &config);

    if let Err(e) = manager.mount().await {
        tracing::error!(error = %e, "Catalog unavailable");
    }

    let filters: Vec<String> = manager
        .filter_options()
        .await
        .into_iter()
        .map(|opt| {
            if opt.selected {
                format!("[{}]", opt.label)
            } else {
                opt.label
            }
        })
        .collect();
    tracing::info!("Filters: {}", filters.join(" "));

    match manager.view().await {
        CatalogView::Loading => tracing::info!("Loading..."),
        CatalogView::Grid(cards) => {
            for card in &cards {
                tracing::info!(
                    category = %card.category,
                    image = card.image.placeholder_text().unwrap_or("yes"),
                    "{} {} {}",
                    card.name,
                    card.price_label,
                    card.rating
                );
            }
            tracing::info!(count = cards.len(), "Dishes shown");
        }
    }

    manager.unmount().await;
    Ok(())
}
