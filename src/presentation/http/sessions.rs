// src/presentation/http/sessions.rs
//! Live editing sessions addressed by an opaque token. HTTP is stateless,
//! so the form state of each open editor is kept here between requests.
//! Sessions idle for longer than the configured TTL are evicted.
use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, RwLock},
    time::Instant,
};
use uuid::Uuid;

use crate::application::editor::ArticleEditSession;
use crate::domain::user::UserId;

pub type SharedSession = Arc<Mutex<ArticleEditSession>>;

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    owner: UserId,
    session: SharedSession,
    last_touched: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) >= ttl
    }
}

pub struct EditorSessions {
    entries: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_ttl: Duration,
}

impl Default for EditorSessions {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL)
    }
}

impl EditorSessions {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub async fn insert(&self, session: ArticleEditSession) -> (Uuid, SharedSession) {
        let token = Uuid::new_v4();
        let owner = session.actor();
        let session = Arc::new(Mutex::new(session));
        let now = Instant::now();

        let mut entries = self.entries.write().await;
        Self::sweep(&mut entries, now, self.idle_ttl);
        entries.insert(
            token,
            SessionEntry {
                owner,
                session: Arc::clone(&session),
                last_touched: now,
            },
        );
        (token, session)
    }

    /// Looks up a session and refreshes its idle timer. Expired sessions and
    /// sessions of other users are reported as missing.
    pub async fn get(&self, token: Uuid, actor: UserId) -> Option<SharedSession> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if entries
            .get(&token)
            .is_some_and(|entry| entry.is_expired(now, self.idle_ttl))
        {
            entries.remove(&token);
            tracing::debug!(%token, "editing session expired");
            return None;
        }

        let entry = entries
            .get_mut(&token)
            .filter(|entry| entry.owner == actor)?;
        entry.last_touched = now;
        Some(Arc::clone(&entry.session))
    }

    pub async fn remove(&self, token: Uuid) -> bool {
        self.entries.write().await.remove(&token).is_some()
    }

    /// Drops every session idle for longer than the TTL and returns how many
    /// were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        Self::sweep(&mut entries, Instant::now(), self.idle_ttl)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn sweep(entries: &mut HashMap<Uuid, SessionEntry>, now: Instant, ttl: Duration) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, ttl));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "evicted idle editing sessions");
        }
        removed
    }
}
