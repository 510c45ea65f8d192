//! Plain-text rendering of the dashboard panels.

use std::fmt;

use skyguard_core::MergedAlerts;
use skyguard_health::guidance::DISCLAIMER;
use skyguard_health::{CovidGuidance, DiseaseSnapshot};
use skyguard_weather::{Place, WeatherReading};

use crate::state::{DashboardState, LocationStatus, Panel};

pub const DEFAULT_TITLE: &str = "Weather & Health Safety";
pub const NO_ALERTS: &str = "No active alerts for your area right now. Stay safe!";

pub fn header_title(place: Option<&Place>) -> String {
    match place {
        Some(p) => p.title(),
        None => DEFAULT_TITLE.to_string(),
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn rounded(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v.round() as i64),
        None => "—".to_string(),
    }
}

/// The alerts & precautions panel.
pub struct AlertsView<'a>(pub &'a MergedAlerts);

impl fmt::Display for AlertsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alerts & Precautions")?;
        if !self.0.has_alerts() {
            return writeln!(f, "  {}", NO_ALERTS);
        }

        writeln!(f, "  Current Alerts")?;
        for hazard in &self.0.hazards {
            writeln!(f, "    ! {}", hazard)?;
        }
        writeln!(f, "  Safety Precautions")?;
        for precaution in &self.0.precautions {
            writeln!(f, "    - {}", precaution)?;
        }
        Ok(())
    }
}

/// Current conditions for the tracked location.
pub struct WeatherView<'a> {
    pub panel: &'a Panel<WeatherReading>,
    pub place: Option<&'a Place>,
}

impl fmt::Display for WeatherView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather")?;
        if let Some(place) = self.place {
            writeln!(f, "  {}", place.title())?;
        }
        if self.panel.loading {
            writeln!(f, "  Loading current conditions…")?;
        }
        if let Some(error) = &self.panel.error {
            writeln!(f, "  Error: {}", error)?;
        }
        if let Some(reading) = &self.panel.data {
            write_reading(f, reading)?;
        }
        Ok(())
    }
}

/// The four readings plus the condition, one per line.
pub fn write_reading(f: &mut impl fmt::Write, reading: &WeatherReading) -> fmt::Result {
    if let Some(condition) = reading.condition() {
        writeln!(f, "  Condition:     {}", condition.description())?;
    }
    writeln!(f, "  Temperature:   {}°C", rounded(reading.temperature_2m))?;
    match reading.precipitation {
        Some(p) => writeln!(f, "  Precipitation: {:.1} mm", p)?,
        None => writeln!(f, "  Precipitation: — mm")?,
    }
    writeln!(f, "  Wind:          {} km/h", rounded(reading.wind_speed_10m))?;
    writeln!(f, "  Humidity:      {}%", rounded(reading.relative_humidity_2m))
}

/// Regional figures plus the standing guidance.
pub struct HealthView<'a> {
    pub panel: &'a Panel<DiseaseSnapshot>,
    pub place_known: bool,
    pub guidance: CovidGuidance,
}

impl fmt::Display for HealthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Health & Medicine")?;
        if !self.place_known {
            writeln!(f, "  Enable location to show relevant health advisories.")?;
        }
        if self.panel.loading {
            writeln!(f, "  Loading regional health indicators…")?;
        }
        if let Some(error) = &self.panel.error {
            writeln!(f, "  Error: {}", error)?;
        }
        if let Some(s) = &self.panel.data {
            writeln!(f, "  Latest COVID-19 snapshot for {}:", s.country)?;
            writeln!(f, "    Today Cases: {}", group_thousands(s.today_cases))?;
            writeln!(f, "    Active:      {}", group_thousands(s.active))?;
            writeln!(f, "    Tests:       {}", group_thousands(s.tests))?;
            writeln!(f, "    Population:  {}", group_thousands(s.population))?;
        }

        for (heading, items) in [
            ("Symptoms", self.guidance.symptoms),
            ("Preventive measures", self.guidance.prevention),
            ("Common medicines (info only)", self.guidance.medicines),
        ] {
            writeln!(f, "  {}", heading)?;
            for item in items {
                writeln!(f, "    • {}", item)?;
            }
        }
        writeln!(f, "  {}", DISCLAIMER)
    }
}

fn location_line(status: &LocationStatus) -> String {
    match status {
        LocationStatus::Idle => "Location: not enabled".to_string(),
        LocationStatus::Requesting => "Location: requesting…".to_string(),
        LocationStatus::Granted => "Location enabled ✔".to_string(),
        LocationStatus::Denied(message) => format!("Location: {}", message),
    }
}

/// Every panel, top to bottom.
pub struct DashboardView<'a> {
    state: &'a DashboardState,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "{}", header_title(state.place.as_ref()))?;
        writeln!(f, "{}", location_line(&state.location))?;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            WeatherView {
                panel: &state.weather,
                place: state.place.as_ref(),
            }
        )?;
        writeln!(
            f,
            "{}",
            HealthView {
                panel: &state.health,
                place_known: state.place.is_some(),
                guidance: CovidGuidance::standard(),
            }
        )?;
        write!(f, "{}", AlertsView(&state.alerts()))?;
        writeln!(f)?;
        write!(
            f,
            "Sources: Open-Meteo (weather), Open-Meteo geocoding, disease.sh (COVID-19)."
        )
    }
}
