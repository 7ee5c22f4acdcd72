// Report assembly and server-rendered pages.
// `build_report` is pure; the render functions only format strings.

pub mod handlers;
pub mod magazine;
pub mod pages;
mod styles;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::diagnosis::{select, Selection, SkinProfile};
use crate::survey::{BudgetTier, Gender, SurveyInput};

pub use magazine::render_magazine;
pub use pages::{render_diagnosis, render_home};

/// Everything the magazine needs, derived from one survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub reader: String,
    pub age: u8,
    pub gender: Gender,
    pub budget: BudgetTier,
    pub profile: SkinProfile,
    pub selection: Selection,
    /// Issue date shown on the cover, e.g. "October 2026".
    pub issue: String,
}

pub fn build_report(survey: &SurveyInput, catalog: &Catalog, today: NaiveDate) -> Report {
    let profile = survey.profile();
    let selection = select(&profile, catalog);

    Report {
        reader: survey.name.clone(),
        age: survey.age,
        gender: survey.gender,
        budget: survey.budget,
        profile,
        selection,
        issue: today.format("%B %Y").to_string(),
    }
}
