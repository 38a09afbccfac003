// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::sessions::EditorSessions;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub sessions: Arc<EditorSessions>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self::with_sessions(services, EditorSessions::default())
    }

    pub fn with_session_ttl(services: Arc<ApplicationServices>, idle_ttl: Duration) -> Self {
        Self::with_sessions(services, EditorSessions::new(idle_ttl))
    }

    pub fn with_sessions(services: Arc<ApplicationServices>, sessions: EditorSessions) -> Self {
        Self {
            services,
            sessions: Arc::new(sessions),
        }
    }
}
