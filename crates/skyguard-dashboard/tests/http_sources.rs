//! End-to-end refresh over HTTP against mocked upstream APIs.

use skyguard_core::Config;
use skyguard_dashboard::{Dashboard, HttpSources, LogNotifier, RefreshOutcome};
use skyguard_weather::{ConfiguredLocation, LocationStore};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, dir: &std::path::Path) -> Config {
    let mut config = Config {
        config_dir: dir.to_path_buf(),
        ..Config::default()
    };
    config.endpoints.forecast_url = format!("{}/v1/forecast", server.uri());
    config.endpoints.geocoding_url = format!("{}/v1", server.uri());
    config.endpoints.disease_url = format!("{}/v3/covid-19", server.uri());
    config.location.latitude = Some(26.91);
    config.location.longitude = Some(75.79);
    config
}

async fn mount_weather(server: &MockServer, temperature: f64) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "26.91"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {
                "temperature_2m": temperature,
                "relative_humidity_2m": 20,
                "precipitation": 0.0,
                "wind_speed_10m": 8.5,
                "weather_code": 0
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "name": "Jaipur",
                "admin1": "Rajasthan",
                "country": "India",
                "country_code": "IN"
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_refresh_over_http() {
    let server = MockServer::start().await;
    mount_weather(&server, 39.2).await;
    Mock::given(method("GET"))
        .and(path("/v3/covid-19/countries/IN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "country": "India",
            "todayCases": 70500,
            "active": 1200,
            "tests": 900000000,
            "population": 1410000000
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path());
    let dash = Dashboard::new(
        HttpSources::from_config(&config).unwrap(),
        ConfiguredLocation::from_config(&config.location),
        LogNotifier,
        LocationStore::new(config.location_cache_path()),
    );

    dash.request_location().await.unwrap();
    assert!(config.location_cache_path().exists());

    let (weather, health) = dash.refresh().await;
    assert_eq!(weather, RefreshOutcome::Applied);
    assert_eq!(health, RefreshOutcome::Applied);

    let state = dash.snapshot();
    assert_eq!(state.place.as_ref().unwrap().title(), "Jaipur, Rajasthan · India");
    assert_eq!(
        dash.alerts().hazards,
        vec!["Extreme heat risk", "Elevated COVID-19 activity"]
    );
}

#[tokio::test]
async fn test_unknown_country_over_http() {
    let server = MockServer::start().await;
    mount_weather(&server, 25.0).await;
    Mock::given(method("GET"))
        .and(path("/v3/covid-19/countries/IN"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Country not found or doesn't have any cases"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path());
    let dash = Dashboard::new(
        HttpSources::from_config(&config).unwrap(),
        ConfiguredLocation::from_config(&config.location),
        LogNotifier,
        LocationStore::new(config.location_cache_path()),
    );
    dash.request_location().await.unwrap();

    let (weather, health) = dash.refresh().await;
    assert_eq!(weather, RefreshOutcome::Applied);
    assert_eq!(health, RefreshOutcome::Failed);

    let state = dash.snapshot();
    assert_eq!(
        state.health.error.as_deref(),
        Some("No health data is available for your country.")
    );
    assert!(!dash.alerts().has_alerts());
}
