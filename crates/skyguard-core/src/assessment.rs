//! Hazard assessments and the merge step that combines them for display.
//!
//! An assessment is produced by one evaluator (weather or health) and is
//! immutable once built. Hazard labels and precautions are deduplicated by
//! exact string equality; the first occurrence fixes the display order.

use serde::{Deserialize, Serialize};

/// Which evaluator produced an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentSource {
    Weather,
    Health,
}

impl AssessmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Health => "health",
        }
    }
}

/// Hazard labels plus the precautions recommended for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardAssessment {
    hazards: Vec<String>,
    precautions: Vec<String>,
    source: AssessmentSource,
}

impl HazardAssessment {
    pub fn builder(source: AssessmentSource) -> AssessmentBuilder {
        AssessmentBuilder {
            inner: HazardAssessment {
                hazards: Vec::new(),
                precautions: Vec::new(),
                source,
            },
        }
    }

    pub fn hazards(&self) -> &[String] {
        &self.hazards
    }

    pub fn precautions(&self) -> &[String] {
        &self.precautions
    }

    pub fn source(&self) -> AssessmentSource {
        self.source
    }

    /// True when no hazard fired.
    pub fn is_clear(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn has_hazard(&self, label: &str) -> bool {
        self.hazards.iter().any(|h| h == label)
    }
}

/// Accumulates hazards and precautions, dropping repeats as they arrive.
#[derive(Debug, Clone)]
pub struct AssessmentBuilder {
    inner: HazardAssessment,
}

impl AssessmentBuilder {
    pub fn hazard(mut self, label: impl Into<String>) -> Self {
        push_unique(&mut self.inner.hazards, label.into());
        self
    }

    pub fn precaution(mut self, text: impl Into<String>) -> Self {
        push_unique(&mut self.inner.precautions, text.into());
        self
    }

    pub fn precautions<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for item in items {
            push_unique(&mut self.inner.precautions, item.into());
        }
        self
    }

    pub fn build(self) -> HazardAssessment {
        self.inner
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// The union of several assessments, ready for the alerts panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergedAlerts {
    pub hazards: Vec<String>,
    pub precautions: Vec<String>,
}

impl MergedAlerts {
    /// False exactly when the deduplicated hazard set is empty.
    pub fn has_alerts(&self) -> bool {
        !self.hazards.is_empty()
    }
}

/// Concatenate hazards and precautions from every assessment and dedupe each
/// list by exact string equality.
pub fn merge_assessments<'a, I>(assessments: I) -> MergedAlerts
where
    I: IntoIterator<Item = &'a HazardAssessment>,
{
    let mut merged = MergedAlerts::default();
    for assessment in assessments {
        for hazard in &assessment.hazards {
            push_unique(&mut merged.hazards, hazard.clone());
        }
        for precaution in &assessment.precautions {
            push_unique(&mut merged.precautions, precaution.clone());
        }
    }
    merged
}
