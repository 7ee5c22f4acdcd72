//! Survey: the self-reported answers collected by the diagnosis form.
//!
//! `SurveyForm` is what arrives over the wire (HTML form or JSON): every field
//! optional, numbers unbounded. `SurveyInput` is the validated, clamped record
//! the rest of the system works with. See `validation` for the conversion.

pub mod validation;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::diagnosis::{classify, SkinProfile};

pub use validation::{validate_survey, SurveyError};

pub const AGE_MIN: u8 = 16;
pub const AGE_MAX: u8 = 90;
pub const DEFAULT_AGE: u8 = 25;

pub const INDICATOR_MAX: u8 = 10;
pub const DEFAULT_HYDRATION: u8 = 5;
pub const DEFAULT_OIL: u8 = 5;
pub const DEFAULT_SENSITIVITY: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Woman,
    Man,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Woman, Gender::Man, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Woman => "Woman",
            Gender::Man => "Man",
            Gender::Other => "Other",
        }
    }

    /// Case-insensitive match on the label.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monthly skincare budget. Ordered cheapest first.
///
/// Collected and displayed, but not consumed by product selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Eco,
    #[default]
    Standard,
    Premium,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Eco, BudgetTier::Standard, BudgetTier::Premium];

    pub fn key(self) -> &'static str {
        match self {
            BudgetTier::Eco => "eco",
            BudgetTier::Standard => "standard",
            BudgetTier::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::Eco => "€ Eco",
            BudgetTier::Standard => "€€ Standard",
            BudgetTier::Premium => "€€€ Premium",
        }
    }

    /// Accepts either the key (`"premium"`) or the display label (`"€€€ Premium"`).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        BudgetTier::ALL
            .into_iter()
            .find(|b| b.key().eq_ignore_ascii_case(raw) || b.label() == raw)
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numeric answer as sent by a client: JSON numbers or form text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Integer(i64),
    Text(String),
}

/// Keeps numeric fields as text so a cleared input (`age=`) or a typo reaches
/// `validate_survey` instead of failing extraction.
fn number_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?.map(|raw| match raw {
        RawNumber::Integer(n) => n.to_string(),
        RawNumber::Text(text) => text,
    }))
}

/// Raw submission as posted by the diagnosis form or the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number_as_text")]
    pub age: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "number_as_text")]
    pub hydration: Option<String>,
    #[serde(default, deserialize_with = "number_as_text")]
    pub oil: Option<String>,
    #[serde(default, deserialize_with = "number_as_text")]
    pub sensitivity: Option<String>,
    pub budget: Option<String>,
}

impl From<&SurveyInput> for SurveyForm {
    fn from(input: &SurveyInput) -> Self {
        Self {
            name: input.name.clone(),
            age: Some(input.age.to_string()),
            gender: Some(input.gender.label().to_string()),
            hydration: Some(input.hydration.to_string()),
            oil: Some(input.oil.to_string()),
            sensitivity: Some(input.sensitivity.to_string()),
            budget: Some(input.budget.key().to_string()),
        }
    }
}

/// Validated survey answers. Held in the session, overwritten on each diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInput {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub hydration: u8,
    pub oil: u8,
    pub sensitivity: u8,
    pub budget: BudgetTier,
}

impl SurveyInput {
    pub fn profile(&self) -> SkinProfile {
        classify(self.hydration, self.oil, self.sensitivity)
    }
}
