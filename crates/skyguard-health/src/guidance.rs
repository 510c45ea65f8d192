//! General COVID-19 guidance shown next to the regional figures.
//! Informational only; the panel carries a disclaimer.

pub const DISCLAIMER: &str = "This section is informational and not a medical prescription. \
Consult local health authorities for official guidance.";

#[derive(Debug, Clone, Copy)]
pub struct CovidGuidance {
    pub symptoms: &'static [&'static str],
    pub prevention: &'static [&'static str],
    /// Common over-the-counter care, not a prescription
    pub medicines: &'static [&'static str],
}

impl CovidGuidance {
    pub const fn standard() -> Self {
        Self {
            symptoms: &[
                "Fever or chills",
                "Cough, sore throat",
                "Shortness of breath",
                "Loss of taste or smell",
                "Fatigue and body aches",
            ],
            prevention: &[
                "Wash hands frequently",
                "Stay home if unwell",
                "Consider mask in crowded indoor spaces",
                "Keep distance from sick individuals",
                "Ensure good ventilation indoors",
            ],
            medicines: &[
                "Paracetamol/Acetaminophen for fever (follow label dosing)",
                "Oral rehydration and rest",
                "Seek medical advice for high-risk individuals",
            ],
        }
    }
}

impl Default for CovidGuidance {
    fn default() -> Self {
        Self::standard()
    }
}
