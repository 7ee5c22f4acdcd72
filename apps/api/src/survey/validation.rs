use thiserror::Error;

use super::{
    BudgetTier, Gender, SurveyForm, SurveyInput, AGE_MAX, AGE_MIN, DEFAULT_AGE,
    DEFAULT_HYDRATION, DEFAULT_OIL, DEFAULT_SENSITIVITY, INDICATOR_MAX,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// The name is printed on the magazine cover.
    #[error("Please enter your first name for the magazine cover.")]
    MissingName,

    #[error("Please enter a whole number for {field}.")]
    InvalidNumber { field: &'static str },
}

/// Blank or absent text means "not answered"; anything else must be an integer.
fn parse_number(raw: Option<&str>, field: &'static str) -> Result<Option<i64>, SurveyError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| SurveyError::InvalidNumber { field }),
    }
}

fn clamp_to(value: Option<i64>, default: u8, min: u8, max: u8) -> u8 {
    match value {
        // Clamped into u8 range first, so the cast cannot truncate.
        Some(v) => v.clamp(i64::from(min), i64::from(max)) as u8,
        None => default,
    }
}

fn number_field(
    raw: &Option<String>,
    field: &'static str,
    default: u8,
    min: u8,
    max: u8,
) -> Result<u8, SurveyError> {
    Ok(clamp_to(parse_number(raw.as_deref(), field)?, default, min, max))
}

/// Validates a raw submission into a `SurveyInput`.
///
/// - name: trimmed, must be non-empty (`SurveyError::MissingName`); checked first
/// - numbers: blank means default, non-integers are `SurveyError::InvalidNumber`
/// - age: default 25, clamped to [16, 90]
/// - hydration / oil / sensitivity: defaults 5 / 5 / 3, clamped to [0, 10]
/// - gender / budget: unknown or missing values take the defaults
pub fn validate_survey(form: &SurveyForm) -> Result<SurveyInput, SurveyError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(SurveyError::MissingName);
    }

    Ok(SurveyInput {
        name: name.to_string(),
        age: number_field(&form.age, "age", DEFAULT_AGE, AGE_MIN, AGE_MAX)?,
        gender: form
            .gender
            .as_deref()
            .and_then(Gender::parse)
            .unwrap_or_default(),
        hydration: number_field(
            &form.hydration,
            "hydration",
            DEFAULT_HYDRATION,
            0,
            INDICATOR_MAX,
        )?,
        oil: number_field(&form.oil, "oil", DEFAULT_OIL, 0, INDICATOR_MAX)?,
        sensitivity: number_field(
            &form.sensitivity,
            "sensitivity",
            DEFAULT_SENSITIVITY,
            0,
            INDICATOR_MAX,
        )?,
        budget: form
            .budget
            .as_deref()
            .and_then(BudgetTier::parse)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> SurveyForm {
        SurveyForm {
            name: name.to_string(),
            ..SurveyForm::default()
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(validate_survey(&named("")), Err(SurveyError::MissingName));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        assert_eq!(
            validate_survey(&named("   \t")),
            Err(SurveyError::MissingName)
        );
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            SurveyError::MissingName.to_string(),
            "Please enter your first name for the magazine cover."
        );
    }

    #[test]
    fn test_defaults_applied() {
        let input = validate_survey(&named("Léa")).unwrap();
        assert_eq!(input.name, "Léa");
        assert_eq!(input.age, 25);
        assert_eq!(input.gender, Gender::Woman);
        assert_eq!(input.hydration, 5);
        assert_eq!(input.oil, 5);
        assert_eq!(input.sensitivity, 3);
        assert_eq!(input.budget, BudgetTier::Standard);
    }

    #[test]
    fn test_name_trimmed() {
        assert_eq!(validate_survey(&named("  Mia ")).unwrap().name, "Mia");
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let form = SurveyForm {
            name: "Zoe".to_string(),
            age: Some("7".to_string()),
            hydration: Some("-4".to_string()),
            oil: Some("42".to_string()),
            sensitivity: Some(i64::MAX.to_string()),
            ..SurveyForm::default()
        };
        let input = validate_survey(&form).unwrap();
        assert_eq!(input.age, 16);
        assert_eq!(input.hydration, 0);
        assert_eq!(input.oil, 10);
        assert_eq!(input.sensitivity, 10);

        let old = SurveyForm {
            age: Some("120".to_string()),
            ..form
        };
        assert_eq!(validate_survey(&old).unwrap().age, 90);
    }

    #[test]
    fn test_unknown_choices_take_defaults() {
        let form = SurveyForm {
            name: "Kim".to_string(),
            gender: Some("n/a".to_string()),
            budget: Some("unlimited".to_string()),
            ..SurveyForm::default()
        };
        let input = validate_survey(&form).unwrap();
        assert_eq!(input.gender, Gender::Woman);
        assert_eq!(input.budget, BudgetTier::Standard);
    }

    #[test]
    fn test_blank_numbers_take_defaults() {
        let form = SurveyForm {
            name: "Ana".to_string(),
            age: Some(String::new()),
            hydration: Some("  ".to_string()),
            oil: Some(" 8 ".to_string()),
            ..SurveyForm::default()
        };
        let input = validate_survey(&form).unwrap();
        assert_eq!(input.age, 25);
        assert_eq!(input.hydration, 5);
        assert_eq!(input.oil, 8);
    }

    #[test]
    fn test_non_integer_rejected() {
        let form = SurveyForm {
            name: "Ana".to_string(),
            age: Some("twenty".to_string()),
            ..SurveyForm::default()
        };
        assert_eq!(
            validate_survey(&form),
            Err(SurveyError::InvalidNumber { field: "age" })
        );
        assert_eq!(
            SurveyError::InvalidNumber { field: "age" }.to_string(),
            "Please enter a whole number for age."
        );
    }

    #[test]
    fn test_missing_name_reported_before_bad_numbers() {
        let form = SurveyForm {
            age: Some(String::new()),
            oil: Some("lots".to_string()),
            ..SurveyForm::default()
        };
        assert_eq!(validate_survey(&form), Err(SurveyError::MissingName));
    }
}
