use skyguard_core::{merge_assessments, HazardAssessment, MergedAlerts};
use skyguard_health::DiseaseSnapshot;
use skyguard_weather::{Coordinates, Place, WeatherReading};

/// Where the location request stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationStatus {
    #[default]
    Idle,
    Requesting,
    Granted,
    /// Carries the message shown to the user
    Denied(String),
}

/// One panel's fetch state. A failed refresh keeps the last good data.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

impl<T> Panel<T> {
    pub(crate) fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, data: T) {
        self.loading = false;
        self.error = None;
        self.data = Some(data);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of everything the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub coords: Option<Coordinates>,
    pub location: LocationStatus,
    /// `None` until a reverse lookup resolves a place
    pub place: Option<Place>,
    pub weather: Panel<WeatherReading>,
    pub health: Panel<DiseaseSnapshot>,
    pub weather_alert: Option<HazardAssessment>,
    pub health_alert: Option<HazardAssessment>,
}

impl DashboardState {
    /// Union of the weather and health assessments.
    pub fn alerts(&self) -> MergedAlerts {
        merge_assessments(self.weather_alert.iter().chain(self.health_alert.iter()))
    }

    pub fn country_code(&self) -> Option<&str> {
        self.place
            .as_ref()
            .and_then(|p| p.country_code.as_deref())
            .filter(|code| !code.is_empty())
    }
}
