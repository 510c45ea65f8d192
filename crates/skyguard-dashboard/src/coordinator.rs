//! The top-level coordinator.
//!
//! State lives behind a single mutex that is never held across an `.await`.
//! Each fetch cycle takes a ticket before its first request and checks it,
//! under the lock, before publishing; a cycle that has been superseded drops
//! its results instead of overwriting newer ones.

use std::sync::Arc;

use parking_lot::Mutex;
use skyguard_core::{AppError, MergedAlerts, SearchConfig};
use skyguard_health::evaluate_health;
use skyguard_weather::{evaluate_weather, Coordinates, LocationProvider, LocationStore, PositionOptions};

use crate::error::DashboardError;
use crate::generation::FetchGeneration;
use crate::notify::{notify_hazards, NotificationSink};
use crate::search::PlaceSearch;
use crate::sources::DataSources;
use crate::state::{DashboardState, LocationStatus};

/// How a refresh ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Results were published
    Applied,
    /// The fetch failed; the panel shows an error
    Failed,
    /// A newer cycle started meanwhile; results were dropped
    Stale,
    /// Nothing to fetch for (no coordinates, or no resolved country)
    Skipped,
}

pub struct Dashboard<S, L, N> {
    sources: Arc<S>,
    locator: L,
    notifier: N,
    store: LocationStore,
    options: PositionOptions,
    notifications_enabled: bool,
    state: Mutex<DashboardState>,
    weather_generation: FetchGeneration,
    health_generation: FetchGeneration,
}

impl<S, L, N> Dashboard<S, L, N>
where
    S: DataSources,
    L: LocationProvider,
    N: NotificationSink,
{
    pub fn new(sources: S, locator: L, notifier: N, store: LocationStore) -> Self {
        Self {
            sources: Arc::new(sources),
            locator,
            notifier,
            store,
            options: PositionOptions::default(),
            notifications_enabled: true,
            state: Mutex::new(DashboardState::default()),
            weather_generation: FetchGeneration::new(),
            health_generation: FetchGeneration::new(),
        }
    }

    pub fn with_position_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    pub fn alerts(&self) -> MergedAlerts {
        self.state.lock().alerts()
    }

    /// A debounced place search sharing this dashboard's sources.
    pub fn place_search(&self, config: &SearchConfig) -> PlaceSearch<S> {
        PlaceSearch::new(Arc::clone(&self.sources), config)
    }

    /// Publish the cached location, if one was saved earlier.
    pub fn restore_location(&self) -> Option<Coordinates> {
        let coords = self.store.load()?;
        tracing::info!("Restored cached location: {}, {}", coords.lat(), coords.lon());

        let mut state = self.state.lock();
        state.coords = Some(coords);
        state.location = LocationStatus::Granted;
        Some(coords)
    }

    /// Ask the location provider for a fix. A grant is persisted and
    /// published; a denial is recorded for display and returned.
    pub async fn request_location(&self) -> Result<Coordinates, AppError> {
        self.state.lock().location = LocationStatus::Requesting;

        match self.locator.current_position(&self.options).await {
            Ok(coords) => {
                if let Err(e) = self.store.save(coords) {
                    tracing::warn!("Failed to persist location: {}", e);
                }
                let mut state = self.state.lock();
                state.coords = Some(coords);
                state.location = LocationStatus::Granted;
                tracing::info!("Location granted: {}, {}", coords.lat(), coords.lon());
                Ok(coords)
            }
            Err(e) => {
                tracing::warn!("Location request failed: {}", e);
                let app: AppError = DashboardError::Location(e).into();
                self.state.lock().location = LocationStatus::Denied(app.user_message().to_string());
                Err(app)
            }
        }
    }

    /// Publish coordinates chosen some other way (e.g. a search result).
    /// They are not persisted.
    pub fn set_coordinates(&self, coords: Coordinates) {
        self.state.lock().coords = Some(coords);
    }

    /// Fetch forecast and place together. Both must succeed for anything to
    /// be published.
    pub async fn refresh_weather(&self) -> RefreshOutcome {
        let coords = self.state.lock().coords;
        let Some(coords) = coords else {
            tracing::debug!("No coordinates yet, skipping weather refresh");
            return RefreshOutcome::Skipped;
        };

        let ticket = self.weather_generation.begin();
        self.state.lock().weather.start();

        let forecast = async {
            self.sources
                .forecast(coords)
                .await
                .map_err(DashboardError::Forecast)
        };
        let place = async {
            self.sources
                .reverse_geocode(coords)
                .await
                .map_err(DashboardError::PlaceLookup)
        };
        let result = tokio::try_join!(forecast, place);

        let assessment = {
            let mut state = self.state.lock();
            if !self.weather_generation.is_current(ticket) {
                tracing::debug!(?ticket, "Dropping superseded weather results");
                return RefreshOutcome::Stale;
            }

            match result {
                Ok((reading, place)) => {
                    let assessment = evaluate_weather(&reading);
                    state.weather.succeed(reading);
                    state.place = place;
                    state.weather_alert = Some(assessment.clone());
                    assessment
                }
                Err(e) => {
                    tracing::warn!("Weather refresh failed: {}", e);
                    let app: AppError = e.into();
                    state.weather.fail(app.user_message());
                    return RefreshOutcome::Failed;
                }
            }
        };

        if self.notifications_enabled {
            let outcome = notify_hazards(&self.notifier, &assessment);
            tracing::debug!(?outcome, "Weather notification");
        }
        RefreshOutcome::Applied
    }

    /// Look up disease figures for the resolved country. Without a country
    /// code the lookup does not run and the health panel is cleared. Figures
    /// that arrive after the place changed country are dropped.
    pub async fn refresh_health(&self) -> RefreshOutcome {
        let ticket = self.health_generation.begin();

        let country_code = {
            let mut state = self.state.lock();
            let code = state.country_code().map(str::to_string);
            match code {
                Some(code) => {
                    state.health.start();
                    code
                }
                None => {
                    tracing::debug!("Place unresolved, skipping health lookup");
                    state.health.clear();
                    state.health_alert = None;
                    return RefreshOutcome::Skipped;
                }
            }
        };

        let result = self.sources.disease(&country_code).await;

        let mut state = self.state.lock();
        if !self.health_generation.is_current(ticket) {
            tracing::debug!(?ticket, "Dropping superseded health results");
            return RefreshOutcome::Stale;
        }
        // The place may have moved to another country while this was in flight.
        if state.country_code() != Some(country_code.as_str()) {
            tracing::debug!(?ticket, "Dropping health results for previous country {}", country_code);
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(snapshot) => {
                state.health_alert = evaluate_health(&snapshot);
                state.health.succeed(snapshot);
                RefreshOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("Health lookup for {} failed: {}", country_code, e);
                let app: AppError = DashboardError::Health(e).into();
                state.health.fail(app.user_message());
                RefreshOutcome::Failed
            }
        }
    }

    /// Weather, then health for whatever place the weather cycle resolved.
    pub async fn refresh(&self) -> (RefreshOutcome, RefreshOutcome) {
        let weather = self.refresh_weather().await;
        let health = match weather {
            // The newer cycle runs its own health lookup.
            RefreshOutcome::Stale => RefreshOutcome::Skipped,
            _ => self.refresh_health().await,
        };
        (weather, health)
    }
}
