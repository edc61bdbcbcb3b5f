//! One-shot flash messages
//!
//! A message set during a mutating request is shown by the next list render
//! of the same session and then discarded. Entries live no longer than the
//! session itself; [`FlashStore::purge_expired`] drops stale ones.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::session::SessionId;

#[derive(Debug, Clone)]
struct FlashEntry {
    message: String,
    expires_at: Instant,
}

/// Session-scoped pending messages
#[derive(Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<SessionId, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Lifetime of a pending message (and of the session cookie)
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `message` for `session`, replacing any unread one
    pub async fn set(&self, session: &SessionId, message: impl Into<String>) {
        let entry = FlashEntry {
            message: message.into(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(session.clone(), entry);
    }

    /// Return and clear the pending message for `session`
    ///
    /// Read and removal happen under one write lock, so a message is handed
    /// out at most once.
    pub async fn take(&self, session: &SessionId) -> Option<String> {
        let entry = self.entries.write().await.remove(session)?;
        if entry.expires_at <= Instant::now() {
            debug!("Dropping expired flash message for session {}", session);
            return None;
        }
        Some(entry.message)
    }

    /// Drop every expired entry; returns how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Number of pending messages
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Periodically purge expired messages until the process exits
pub fn spawn_sweeper(store: FlashStore, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                debug!("Purged {} expired flash messages", purged);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_take_returns_message_once() {
        let store = FlashStore::new(Duration::from_secs(60));
        let session = SessionId::generate();

        store.set(&session, "Contact added successfully!").await;

        assert_eq!(
            store.take(&session).await.as_deref(),
            Some("Contact added successfully!")
        );
        assert_eq!(store.take(&session).await, None);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = FlashStore::new(Duration::from_secs(60));
        let mine = SessionId::generate();
        let theirs = SessionId::generate();

        store.set(&mine, "mine").await;

        assert_eq!(store.take(&theirs).await, None);
        assert_eq!(store.take(&mine).await.as_deref(), Some("mine"));
    }

    #[tokio::test]
    async fn test_second_set_replaces_first() {
        let store = FlashStore::new(Duration::from_secs(60));
        let session = SessionId::generate();

        store.set(&session, "first").await;
        store.set(&session, "second").await;

        assert_eq!(store.take(&session).await.as_deref(), Some("second"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_message_is_not_returned() {
        let store = FlashStore::new(Duration::from_millis(20));
        let session = SessionId::generate();

        store.set(&session, "stale").await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.take(&session).await, None);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = FlashStore::new(Duration::from_millis(20));
        store.set(&SessionId::generate(), "a").await;
        store.set(&SessionId::generate(), "b").await;
        assert_eq!(store.len().await, 2);

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.purge_expired().await, 2);
        assert!(store.is_empty().await);
    }
}
