use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{Session, SessionStore, Stage};
use crate::survey::SurveyInput;

/// Process-local session map. Idle sessions are purged lazily on `create`.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> Option<Session>
    where
        F: FnOnce(&mut Session) + Send,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        apply(session);
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Session {
        let now = Utc::now();
        self.purge_expired(now).await;

        let session = Session::new(now);
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        debug!("Session {} created", session.id);
        session
    }

    async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    async fn begin_diagnosis(&self, id: Uuid) -> Option<Session> {
        self.update(id, |s| s.stage = Stage::Diagnosis).await
    }

    async fn submit(&self, id: Uuid, survey: SurveyInput) -> Option<Session> {
        self.update(id, move |s| {
            s.survey = Some(survey);
            s.stage = Stage::Magazine;
        })
        .await
    }

    async fn reset(&self, id: Uuid) -> Option<Session> {
        self.update(id, |s| {
            s.survey = None;
            s.stage = Stage::Home;
        })
        .await
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!("Purged {purged} idle sessions");
        }
        purged
    }
}
