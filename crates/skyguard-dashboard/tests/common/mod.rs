//! In-memory stand-ins for the remote sources, the location service and the
//! notification facility.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use skyguard_core::LocationError;
use skyguard_dashboard::{DataSources, NotificationPermission, NotificationSink};
use skyguard_health::{DiseaseSnapshot, HealthError};
use skyguard_weather::{
    Coordinates, LocationProvider, Place, PlaceCandidate, PositionOptions, SearchQuery,
    WeatherError, WeatherReading,
};

/// One scripted response, delivered after `delay`.
pub struct Scripted<T> {
    pub delay: Duration,
    pub result: T,
}

type Script<T> = Arc<Mutex<VecDeque<Scripted<T>>>>;

/// Clones share the same script, so a test can keep a handle after moving
/// one into the dashboard.
#[derive(Clone, Default)]
pub struct FakeSources {
    pub forecasts: Script<Result<WeatherReading, WeatherError>>,
    pub places: Script<Result<Option<Place>, WeatherError>>,
    pub searches: Script<Result<Vec<PlaceCandidate>, WeatherError>>,
    pub diseases: Script<Result<DiseaseSnapshot, HealthError>>,
    pub search_queries: Arc<Mutex<Vec<String>>>,
    pub disease_queries: Arc<Mutex<Vec<String>>>,
}

impl FakeSources {
    pub fn push_forecast(&self, delay_ms: u64, result: Result<WeatherReading, WeatherError>) {
        self.forecasts.lock().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn push_place(&self, delay_ms: u64, result: Result<Option<Place>, WeatherError>) {
        self.places.lock().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn push_search(&self, delay_ms: u64, result: Result<Vec<PlaceCandidate>, WeatherError>) {
        self.searches.lock().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn push_disease(&self, delay_ms: u64, result: Result<DiseaseSnapshot, HealthError>) {
        self.diseases.lock().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }
}

async fn play<T>(queue: &Mutex<VecDeque<Scripted<T>>>, what: &str) -> T {
    let next = queue.lock().pop_front();
    let Some(next) = next else {
        panic!("no scripted {} response left", what);
    };
    tokio::time::sleep(next.delay).await;
    next.result
}

impl DataSources for FakeSources {
    async fn forecast(&self, _coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        play(&self.forecasts, "forecast").await
    }

    async fn reverse_geocode(&self, _coords: Coordinates) -> Result<Option<Place>, WeatherError> {
        play(&self.places, "place").await
    }

    async fn search_places(&self, query: &SearchQuery) -> Result<Vec<PlaceCandidate>, WeatherError> {
        self.search_queries.lock().push(query.name.clone());
        play(&self.searches, "search").await
    }

    async fn disease(&self, country_code: &str) -> Result<DiseaseSnapshot, HealthError> {
        self.disease_queries.lock().push(country_code.to_string());
        play(&self.diseases, "disease").await
    }
}

pub struct FakeLocator(pub Mutex<Option<Result<Coordinates, LocationError>>>);

impl FakeLocator {
    pub fn granting(coords: Coordinates) -> Self {
        Self(Mutex::new(Some(Ok(coords))))
    }

    pub fn denying(error: LocationError) -> Self {
        Self(Mutex::new(Some(Err(error))))
    }
}

impl LocationProvider for FakeLocator {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Coordinates, LocationError> {
        self.0
            .lock()
            .take()
            .unwrap_or(Err(LocationError::Unavailable("already used".into())))
    }
}

#[derive(Clone, Default)]
pub struct FakeNotifier {
    pub shown: Arc<Mutex<Vec<String>>>,
}

impl NotificationSink for FakeNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    fn request_permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    fn show(&self, _title: &str, body: &str) {
        self.shown.lock().push(body.to_string());
    }
}

pub fn reading(t: f64, rh: f64, rain: f64, wind: f64, code: i32) -> WeatherReading {
    WeatherReading {
        temperature_2m: Some(t),
        relative_humidity_2m: Some(rh),
        precipitation: Some(rain),
        wind_speed_10m: Some(wind),
        weather_code: Some(code),
    }
}

pub fn place(name: &str, country_code: &str) -> Place {
    Place {
        name: Some(name.to_string()),
        admin1: None,
        country: Some("Testland".to_string()),
        country_code: Some(country_code.to_string()),
    }
}

pub fn snapshot(today_cases: u64, population: u64) -> DiseaseSnapshot {
    DiseaseSnapshot {
        country: "Testland".to_string(),
        today_cases,
        population,
        active: 10,
        tests: 100,
    }
}

pub fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).unwrap()
}
