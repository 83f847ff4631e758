use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pain point vocabulary shared with the advisory service.
///
/// The variant order is the canonical order used when a set of pain points
/// is serialized. Adding a key means adding it on the service as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainPointKey {
    HandNumbness,
    KneeFront,
    KneeBack,
    NeckPain,
    LowerBackPain,
    HipPain,
}

impl PainPointKey {
    /// Every key, in vocabulary order
    pub const ALL: [PainPointKey; 6] = [
        PainPointKey::HandNumbness,
        PainPointKey::KneeFront,
        PainPointKey::KneeBack,
        PainPointKey::NeckPain,
        PainPointKey::LowerBackPain,
        PainPointKey::HipPain,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            PainPointKey::HandNumbness => "hand_numbness",
            PainPointKey::KneeFront => "knee_front",
            PainPointKey::KneeBack => "knee_back",
            PainPointKey::NeckPain => "neck_pain",
            PainPointKey::LowerBackPain => "lower_back_pain",
            PainPointKey::HipPain => "hip_pain",
        }
    }

    /// Human readable label shown next to the toggle
    pub fn label(&self) -> &'static str {
        match self {
            PainPointKey::HandNumbness => "Hand numbness",
            PainPointKey::KneeFront => "Front knee pain",
            PainPointKey::KneeBack => "Back knee pain",
            PainPointKey::NeckPain => "Neck pain",
            PainPointKey::LowerBackPain => "Lower back pain",
            PainPointKey::HipPain => "Hip pain",
        }
    }
}

impl fmt::Display for PainPointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PainPointKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PainPointKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| UnknownVariant::new("pain_point", s))
    }
}

/// Riding style the fit should be tuned for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RidingStyle {
    #[default]
    Endurance,
    Race,
    Gravel,
    Commute,
}

impl RidingStyle {
    pub const ALL: [RidingStyle; 4] = [
        RidingStyle::Endurance,
        RidingStyle::Race,
        RidingStyle::Gravel,
        RidingStyle::Commute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RidingStyle::Endurance => "endurance",
            RidingStyle::Race => "race",
            RidingStyle::Gravel => "gravel",
            RidingStyle::Commute => "commute",
        }
    }
}

impl fmt::Display for RidingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RidingStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "endurance" => Ok(RidingStyle::Endurance),
            "race" => Ok(RidingStyle::Race),
            "gravel" => Ok(RidingStyle::Gravel),
            "commute" => Ok(RidingStyle::Commute),
            _ => Err(UnknownVariant::new("riding_style", s)),
        }
    }
}

/// Self-reported flexibility; drives bar drop tolerance on the service side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Low,
    #[default]
    Medium,
    High,
}

impl Flexibility {
    pub const ALL: [Flexibility; 3] = [Flexibility::Low, Flexibility::Medium, Flexibility::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flexibility::Low => "low",
            Flexibility::Medium => "medium",
            Flexibility::High => "high",
        }
    }
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flexibility {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Flexibility::Low),
            "medium" => Ok(Flexibility::Medium),
            "high" => Ok(Flexibility::High),
            _ => Err(UnknownVariant::new("flexibility", s)),
        }
    }
}

/// Raw value outside a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Targeted guidance for one submitted pain point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainGuidance {
    pub label: String,
    #[serde(default)]
    pub likely_causes: Vec<String>,
    pub first_adjustment: String,
    pub caution: String,
}
