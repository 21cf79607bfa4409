//! Shared application state: the in-memory session table. Each
//! session is an independent state tree mutated only by its own
//! visitor's actions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::session::{Role, Session};

#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn create_session(&self) -> Session {
        let session = Session::new();
        log::info!("Session {} created at {}", session.id, session.created_at);
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        session
    }

    /// Snapshot for rendering. Takes the one-shot notice out of the
    /// stored session so it is shown exactly once.
    pub async fn render_state(&self, id: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id)?;
        let mut view = session.clone();
        view.notice = session.notice.take();
        Some(view)
    }

    pub async fn role(&self, id: &str) -> Option<Role> {
        let sessions = self.sessions.read().await;
        sessions.get(id).and_then(|session| session.role)
    }

    /// Applies a state transition to one session; unknown ids are
    /// ignored (stale cookie after a restart).
    pub async fn update<F>(&self, id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(session) => {
                apply(session);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn updates_apply_to_the_stored_session() {
        let state = AppState::new();
        let session = state.create_session().await;
        assert!(
            state
                .update(&session.id, |s| {
                    s.select_role(Role::Guest);
                })
                .await
        );
        assert_eq!(state.role(&session.id).await, Some(Role::Guest));
    }

    #[actix_web::test]
    async fn unknown_session_ids_are_ignored() {
        let state = AppState::new();
        assert!(!state.update("missing", |_| {}).await);
        assert!(state.render_state("missing").await.is_none());
    }

    #[actix_web::test]
    async fn notices_render_exactly_once() {
        let state = AppState::new();
        let session = state.create_session().await;
        state
            .update(&session.id, |s| {
                s.notice = Some("ok".to_string());
            })
            .await;

        let first = state.render_state(&session.id).await.unwrap();
        assert_eq!(first.notice.as_deref(), Some("ok"));
        let second = state.render_state(&session.id).await.unwrap();
        assert_eq!(second.notice, None);
    }
}
