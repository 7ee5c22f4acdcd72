//! Home and diagnosis pages.

use handlebars::html_escape;
use uuid::Uuid;

use super::styles::CSS;
use crate::survey::{
    BudgetTier, Gender, SurveyForm, AGE_MAX, AGE_MIN, DEFAULT_AGE, DEFAULT_HYDRATION,
    DEFAULT_OIL, DEFAULT_SENSITIVITY, INDICATOR_MAX,
};

pub(crate) fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        css = CSS,
        body = body,
    )
}

/// Landing page. The button opens a new session.
pub fn render_home() -> String {
    document(
        "GLOW",
        r#"<div class="page">
    <h1 class="brand-hero">GLOW</h1>
    <p class="tagline">YOUR SMART BEAUTY CONSULTANT</p>
    <form method="post" action="/sessions" class="center">
        <button type="submit" class="button">START THE DIAGNOSIS</button>
    </form>
</div>"#,
    )
}

/// Echoes what the visitor typed, or the default for an unanswered field.
fn prefill(raw: &Option<String>, default: u8) -> String {
    match raw.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => html_escape(text),
        _ => default.to_string(),
    }
}

fn slider(id: &str, label: &str, value: String, caption: &str) -> String {
    format!(
        r#"<label for="{id}">{label} <output id="{id}-value">{value}</output></label>
        <input type="range" id="{id}" name="{id}" min="0" max="{max}" value="{value}"
               oninput="document.getElementById('{id}-value').value = this.value">
        <p class="caption">{caption}</p>"#,
        max = INDICATOR_MAX,
    )
}

fn options<T: Copy + PartialEq>(
    all: &[T],
    selected: T,
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> String {
    all.iter()
        .map(|&item| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                value(item),
                if item == selected { " selected" } else { "" },
                html_escape(label(item)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Diagnosis form, pre-filled from `form`. `error` is shown above the form.
pub fn render_diagnosis(session_id: Uuid, form: &SurveyForm, error: Option<&str>) -> String {
    let gender = form
        .gender
        .as_deref()
        .and_then(Gender::parse)
        .unwrap_or_default();
    let budget = form
        .budget
        .as_deref()
        .and_then(BudgetTier::parse)
        .unwrap_or_default();
    let error_html = error
        .map(|msg| format!(r#"<div class="error" role="alert">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="page">
    <h2 class="center">Diagnose your skin</h2>
    <div class="intro">
        To build your precise skin profile, tell us about your skin indicators.
        Our analysis will work out your exact skin type.
    </div>
    {error_html}
    <form method="post" action="/sessions/{session_id}/diagnosis">
        <div class="row">
            <div>
                <label for="name">First name</label>
                <input type="text" id="name" name="name" value="{name}">
                <label for="age">Age</label>
                <input type="number" id="age" name="age" min="{age_min}" max="{age_max}" value="{age}">
            </div>
            <div>
                <label for="gender">Gender</label>
                <select id="gender" name="gender">
            {genders}
                </select>
            </div>
        </div>

        <h3>Skin indicators</h3>
        {hydration}
        {oil}
        {sensitivity}

        <label for="budget">Monthly skincare budget</label>
        <select id="budget" name="budget">
            {budgets}
        </select>
        <p class="caption">Tells us how much you want to invest in your routine.</p>

        <p class="center"><button type="submit" class="button">GENERATE MY SPECIAL EDITION</button></p>
    </form>
</div>"#,
        name = html_escape(&form.name),
        age_min = AGE_MIN,
        age_max = AGE_MAX,
        age = prefill(&form.age, DEFAULT_AGE),
        genders = options(&Gender::ALL, gender, Gender::label, Gender::label),
        hydration = slider(
            "hydration",
            "Hydration level",
            prefill(&form.hydration, DEFAULT_HYDRATION),
            "0: very dry, feels tight. 10: very hydrated, supple.",
        ),
        oil = slider(
            "oil",
            "Sebum level",
            prefill(&form.oil, DEFAULT_OIL),
            "0: matte, dry. 10: very shiny, oily.",
        ),
        sensitivity = slider(
            "sensitivity",
            "Sensitivity level",
            prefill(&form.sensitivity, DEFAULT_SENSITIVITY),
            "0: resilient skin. 10: frequent redness and reactions.",
        ),
        budgets = options(&BudgetTier::ALL, budget, BudgetTier::key, BudgetTier::label),
    );

    document("GLOW · Diagnosis", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_posts_to_sessions() {
        let html = render_home();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"action="/sessions""#));
    }

    #[test]
    fn test_diagnosis_defaults() {
        let id = Uuid::new_v4();
        let html = render_diagnosis(id, &SurveyForm::default(), None);
        assert!(html.contains(&format!("/sessions/{id}/diagnosis")));
        assert!(html.contains(r#"name="age" min="16" max="90" value="25""#));
        assert!(html.contains(r#"name="hydration" min="0" max="10" value="5""#));
        assert!(html.contains(r#"name="sensitivity" min="0" max="10" value="3""#));
        assert!(html.contains(r#"<option value="standard" selected>"#));
        assert!(html.contains(r#"<option value="Woman" selected>"#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_diagnosis_shows_error_and_keeps_values() {
        let form = SurveyForm {
            name: String::new(),
            oil: Some("9".to_string()),
            gender: Some("Man".to_string()),
            budget: Some("eco".to_string()),
            ..SurveyForm::default()
        };
        let html = render_diagnosis(Uuid::new_v4(), &form, Some("Name required"));
        assert!(html.contains("Name required"));
        assert!(html.contains(r#"name="oil" min="0" max="10" value="9""#));
        assert!(html.contains(r#"<option value="Man" selected>"#));
        assert!(html.contains(r#"<option value="eco" selected>"#));
    }

    #[test]
    fn test_diagnosis_escapes_prefilled_name() {
        let form = SurveyForm {
            name: r#""><script>x</script>"#.to_string(),
            ..SurveyForm::default()
        };
        let html = render_diagnosis(Uuid::new_v4(), &form, None);
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_diagnosis_blank_numbers_show_defaults() {
        let form = SurveyForm {
            age: Some(String::new()),
            hydration: Some(" ".to_string()),
            ..SurveyForm::default()
        };
        let html = render_diagnosis(Uuid::new_v4(), &form, None);
        assert!(html.contains(r#"name="age" min="16" max="90" value="25""#));
        assert!(html.contains(r#"name="hydration" min="0" max="10" value="5""#));
    }

    #[test]
    fn test_diagnosis_escapes_echoed_numbers() {
        let form = SurveyForm {
            age: Some(r#""><b>"#.to_string()),
            ..SurveyForm::default()
        };
        let html = render_diagnosis(Uuid::new_v4(), &form, None);
        assert!(!html.contains(r#""><b>"#));
        assert!(html.contains("&quot;&gt;&lt;b&gt;"));
    }
}
