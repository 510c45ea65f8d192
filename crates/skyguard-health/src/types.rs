use serde::{Deserialize, Deserializer, Serialize};

/// One country's COVID-19 figures as reported by disease.sh.
///
/// Missing or null counts read as zero; a missing, null or zero population
/// reads as one so the incidence rate stays defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseSnapshot {
    #[serde(default, deserialize_with = "or_default")]
    pub country: String,
    #[serde(default, deserialize_with = "or_default")]
    pub today_cases: u64,
    #[serde(default = "default_population", deserialize_with = "population")]
    pub population: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub active: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub tests: u64,
}

fn default_population() -> u64 {
    1
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn population<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?
        .filter(|&p| p > 0)
        .unwrap_or_else(default_population))
}
