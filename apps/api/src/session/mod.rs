//! Session: per-visitor context holding the current stage and the last
//! validated survey. Memory only; nothing is ever written to durable storage.
//!
//! `AppState` carries an `Arc<dyn SessionStore>`; `InMemorySessionStore` is
//! the only backend.

mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::survey::SurveyInput;

pub use memory::InMemorySessionStore;

/// Where the visitor is in the home → diagnosis → magazine flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Home,
    Diagnosis,
    Magazine,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub stage: Stage,
    pub survey: Option<SurveyInput>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: Stage::Diagnosis,
            survey: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The survey to report on, only once the session reached the magazine stage.
    pub fn report_survey(&self) -> Option<&SurveyInput> {
        match self.stage {
            Stage::Magazine => self.survey.as_ref(),
            Stage::Home | Stage::Diagnosis => None,
        }
    }
}

/// Session backend. Every method returns `None` for an unknown session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self) -> Session;

    async fn get(&self, id: Uuid) -> Option<Session>;

    /// Moves the session to the diagnosis stage, keeping any previous survey.
    async fn begin_diagnosis(&self, id: Uuid) -> Option<Session>;

    /// Stores a validated survey (last write wins) and advances to the magazine.
    async fn submit(&self, id: Uuid, survey: SurveyInput) -> Option<Session>;

    /// "New diagnosis": drops the survey and returns to the home stage.
    async fn reset(&self, id: Uuid) -> Option<Session>;

    /// Drops sessions idle since before `now - ttl`. Returns how many were dropped.
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{BudgetTier, Gender};

    #[test]
    fn test_new_session_starts_at_diagnosis_without_survey() {
        let session = Session::new(Utc::now());
        assert_eq!(session.stage, Stage::Diagnosis);
        assert!(session.survey.is_none());
        assert!(session.report_survey().is_none());
    }

    #[test]
    fn test_report_survey_requires_magazine_stage() {
        let mut session = Session::new(Utc::now());
        session.survey = Some(SurveyInput {
            name: "Ana".to_string(),
            age: 25,
            gender: Gender::Woman,
            hydration: 5,
            oil: 5,
            sensitivity: 3,
            budget: BudgetTier::Standard,
        });
        assert!(session.report_survey().is_none());

        session.stage = Stage::Magazine;
        assert_eq!(session.report_survey().map(|s| s.name.as_str()), Some("Ana"));
    }
}
