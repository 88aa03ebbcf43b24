//! Session storage — a trait over get-or-create/delete so the
//! in-memory table can later be swapped for a persistent backend.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use super::state::Session;

/// Backend-agnostic session store.
///
/// The returned handle wraps the session in a `Mutex`; holding that
/// lock for the whole transition serializes concurrent messages from
/// the same sender. Sessions for different senders never share state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the session for `sender`, creating one on first contact.
    async fn session(&self, sender: &str) -> Arc<Mutex<Session>>;

    /// Delete the session for `sender`, if any.
    async fn delete(&self, sender: &str);

    /// Evict sessions idle for longer than `ttl`. Returns the number
    /// evicted.
    async fn prune_idle(&self, ttl: Duration) -> usize;
}

/// Process-local session table.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self, sender: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(sender) {
            return Arc::clone(session);
        }
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(sender.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new())));
        Arc::clone(session)
    }

    async fn delete(&self, sender: &str) {
        self.sessions.write().await.remove(sender);
    }

    async fn prune_idle(&self, ttl: Duration) -> usize {
        // A TTL too large for the calendar type means nothing is idle.
        let Some(cutoff) = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| chrono::Utc::now().checked_sub_signed(ttl))
        else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        // A locked session has a transition in flight and is by
        // definition not idle.
        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => guard.last_activity > cutoff,
            Err(_) => true,
        });
        before - sessions.len()
    }
}

/// Spawn a background task that evicts idle sessions every `interval`.
pub fn spawn_prune_task(
    store: Arc<dyn SessionStore>,
    ttl: Duration,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let pruned = store.prune_idle(ttl).await;
            if pruned > 0 {
                tracing::info!(pruned, "Evicted idle sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::state::ConversationState;

    #[tokio::test]
    async fn session_is_created_on_first_contact() {
        let store = InMemorySessionStore::new();
        let session = store.session("whatsapp:+5491100000001").await;
        assert_eq!(session.lock().await.state, ConversationState::Initial);
    }

    #[tokio::test]
    async fn same_sender_gets_same_session() {
        let store = InMemorySessionStore::new();
        let first = store.session("whatsapp:+5491100000001").await;
        first.lock().await.current_field = 3;

        let second = store.session("whatsapp:+5491100000001").await;
        assert_eq!(second.lock().await.current_field, 3);
    }

    #[tokio::test]
    async fn different_senders_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = store.session("whatsapp:+5491100000001").await;
        a.lock().await.current_field = 7;

        let b = store.session("whatsapp:+5491100000002").await;
        assert_eq!(b.lock().await.current_field, 0);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let store = InMemorySessionStore::new();
        let session = store.session("whatsapp:+5491100000001").await;
        session.lock().await.current_field = 5;
        store.delete("whatsapp:+5491100000001").await;

        let fresh = store.session("whatsapp:+5491100000001").await;
        assert_eq!(fresh.lock().await.current_field, 0);
    }

    #[tokio::test]
    async fn prune_evicts_only_idle_sessions() {
        let store = InMemorySessionStore::new();
        let stale = store.session("stale").await;
        stale.lock().await.last_activity = chrono::Utc::now() - chrono::Duration::hours(2);
        store.session("fresh").await;

        let pruned = store.prune_idle(Duration::from_secs(3600)).await;
        assert_eq!(pruned, 1);

        // The fresh session survived with its state intact.
        let fresh = store.session("fresh").await;
        assert_eq!(fresh.lock().await.state, ConversationState::Initial);
    }

    #[tokio::test]
    async fn prune_skips_locked_sessions() {
        let store = InMemorySessionStore::new();
        let busy = store.session("busy").await;
        busy.lock().await.last_activity = chrono::Utc::now() - chrono::Duration::hours(2);

        let guard = busy.lock().await;
        let pruned = store.prune_idle(Duration::from_secs(3600)).await;
        drop(guard);

        assert_eq!(pruned, 0);
    }
}
