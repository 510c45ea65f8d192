use anyhow::Result;
use skyguard_dashboard::render::write_reading;
use skyguard_dashboard::{Dashboard, DashboardView, HttpSources, LogNotifier};
use skyguard_weather::{ConfiguredLocation, LocationStore, PositionOptions};

#[tokio::main]
async fn main() -> Result<()> {
    skyguard_core::init()?;

    let (config, _) = skyguard_core::Config::load_validated()?;
    tracing::info!("Config directory: {}", config.config_dir.display());

    let dashboard = Dashboard::new(
        HttpSources::from_config(&config)?,
        ConfiguredLocation::from_config(&config.location),
        LogNotifier,
        LocationStore::new(config.location_cache_path()),
    )
    .with_position_options(PositionOptions::from(&config.location))
    .with_notifications(config.notifications.enabled);

    // `skyguard <place>` searches instead of showing the dashboard.
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.is_empty() {
        return search(&dashboard, &config.search, &query).await;
    }

    if dashboard.restore_location().is_none() {
        if let Err(e) = dashboard.request_location().await {
            tracing::warn!("No location available: {}", e);
        }
    }

    dashboard.refresh().await;
    println!("{}", DashboardView::new(&dashboard.snapshot()));

    Ok(())
}

async fn search<S, L, N>(
    dashboard: &Dashboard<S, L, N>,
    config: &skyguard_core::SearchConfig,
    query: &str,
) -> Result<()>
where
    S: skyguard_dashboard::DataSources,
    L: skyguard_weather::LocationProvider,
    N: skyguard_dashboard::NotificationSink,
{
    let search = dashboard.place_search(config);
    let Some(result) = search.query(query).await else {
        return Ok(());
    };
    let candidates = result.map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let Some(first) = candidates.first() else {
        println!("No places found for '{}'", query.trim());
        return Ok(());
    };
    for candidate in &candidates {
        println!("{}", candidate.label());
    }

    let reading = search
        .weather_for(first)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let mut text = format!("\nCurrent conditions in {}\n", first.name);
    write_reading(&mut text, &reading)?;
    print!("{}", text);

    Ok(())
}
