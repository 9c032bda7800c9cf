use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Generation counter for overlapping catalog requests.
///
/// Catalog calls can complete out of order. A front end starts a ticket for
/// each query and only applies the response if the ticket is still the most
/// recent one, so a slow earlier search cannot overwrite a newer result.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    pub fn begin(&self) -> RequestTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Run `request` under a fresh ticket; `None` if a newer request started meanwhile
    pub async fn run_latest<F, T>(&self, request: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let output = request.await;

        if ticket.is_current() {
            Some(output)
        } else {
            debug!(
                "Discarding stale response for request {} (latest is {})",
                ticket.generation(),
                self.current_generation()
            );
            None
        }
    }
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());

        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
        assert_eq!(tracker.current_generation(), second.generation());
    }

    #[test]
    fn test_clones_share_generation() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        let _ = tracker.clone().begin();
        assert!(!ticket.is_current());
    }

    #[tokio::test]
    async fn test_slow_earlier_request_is_discarded() {
        let tracker = RequestTracker::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<&str>();

        let slow = tracker.run_latest(async move { rx.await.unwrap_or("dropped") });
        let fast = tracker.run_latest(async { "fast" });

        let (slow_out, fast_out) = tokio::join!(slow, async {
            let out = fast.await;
            tx.send("slow").unwrap();
            out
        });

        assert_eq!(slow_out, None);
        assert_eq!(fast_out, Some("fast"));
    }

    #[tokio::test]
    async fn test_single_request_is_kept() {
        let tracker = RequestTracker::new();
        assert_eq!(tracker.run_latest(async { 42 }).await, Some(42));
    }
}
