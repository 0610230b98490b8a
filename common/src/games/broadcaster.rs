use std::future::Future;

use super::snake::SnakeSnapshot;

/// Outward transport for one session. Only the session loop writes to it, so
/// implementations need no locking of their own.
pub trait GameBroadcaster: Send {
    /// An error is fatal to the session; the loop never retries.
    fn broadcast_state(
        &mut self,
        snapshot: &SnakeSnapshot,
    ) -> impl Future<Output = Result<(), String>> + Send;
}
