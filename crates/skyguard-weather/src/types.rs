use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::Sleet, // Freezing drizzle
            61 | 63 | 80 => Self::Rain,
            65 | 81 | 82 => Self::HeavyRain,
            66 | 67 => Self::Sleet, // Freezing rain
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// A validated latitude/longitude pair.
///
/// Serialized as `{"lat": .., "lon": ..}`, which is also the on-disk format
/// of the cached location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, WeatherError> {
        let coords = Self { lat, lon };
        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(WeatherError::InvalidCoordinates { lat, lon })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Deserialized values bypass `new`, so stored data is re-checked here.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Current conditions as returned by the forecast API.
///
/// Any field may be missing from the response; rules that depend on a
/// missing field simply don't fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReading {
    /// Air temperature at 2 m, °C
    pub temperature_2m: Option<f64>,
    /// Relative humidity at 2 m, %
    pub relative_humidity_2m: Option<f64>,
    /// Precipitation, mm
    pub precipitation: Option<f64>,
    /// Wind speed at 10 m, km/h
    pub wind_speed_10m: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<i32>,
}

impl WeatherReading {
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather_code.map(WeatherCondition::from_wmo_code)
    }
}

/// Best reverse-geocoding match for a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: Option<String>,
    /// First-level administrative region (state, province)
    pub admin1: Option<String>,
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code; health lookups need it
    pub country_code: Option<String>,
}

impl Place {
    /// "Name, Region · Country", falling back to "Your area" without a name.
    pub fn title(&self) -> String {
        let mut title = self.name.clone().unwrap_or_else(|| "Your area".to_string());
        if let Some(admin1) = self.admin1.as_deref().filter(|a| !a.is_empty()) {
            title.push_str(", ");
            title.push_str(admin1);
        }
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            title.push_str(" · ");
            title.push_str(country);
        }
        title
    }
}

/// A forward-search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub id: Option<i64>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub admin1: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl PlaceCandidate {
    /// Non-empty parts of name, region and country, comma separated.
    pub fn label(&self) -> String {
        [
            Some(self.name.as_str()),
            self.admin1.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn coordinates(&self) -> Result<Coordinates, WeatherError> {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Coordinates out of range: {lat}, {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("Cache error: {0}")]
    Cache(String),
}
