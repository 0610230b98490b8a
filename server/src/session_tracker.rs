use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use common::SessionId;

/// Live sessions, for logging only. Sessions never read each other's state.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    sessions: Arc<Mutex<HashSet<SessionId>>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live sessions after the insert.
    pub async fn add(&self, session_id: &SessionId) -> usize {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id.clone());
        sessions.len()
    }

    /// Returns the number of live sessions after the removal.
    pub async fn remove(&self, session_id: &SessionId) -> usize {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(session_id);
        sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> SessionId {
        SessionId::new(name.to_string())
    }

    #[tokio::test]
    async fn test_add_and_remove() {
        let tracker = SessionTracker::new();
        assert_eq!(tracker.add(&id("a")).await, 1);
        assert_eq!(tracker.add(&id("b")).await, 2);
        assert_eq!(tracker.remove(&id("a")).await, 1);
        assert_eq!(tracker.remove(&id("a")).await, 1);
        assert_eq!(tracker.count().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let tracker = SessionTracker::new();
        let clone = tracker.clone();
        clone.add(&id("a")).await;
        assert_eq!(tracker.count().await, 1);
    }
}
