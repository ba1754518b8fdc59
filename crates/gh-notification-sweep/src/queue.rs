//! Shared work queue
//!
//! A bounded tokio channel whose single receiver is shared by every worker of
//! a pool. Workers take turns pulling the next item; once the sender side is
//! dropped and the buffer is drained, every worker sees `None` and exits.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Multi-consumer end of a bounded channel
pub struct WorkQueue<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for WorkQueue<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> WorkQueue<T> {
    /// Wait for the next item; `None` once the queue is closed and empty
    pub async fn next(&self) -> Option<T> {
        // Only held while waiting, never while the item is processed
        self.rx.lock().await.recv().await
    }
}

/// Create a queue that buffers up to `capacity` items (at least one)
pub fn bounded<T>(capacity: usize) -> (mpsc::Sender<T>, WorkQueue<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        tx,
        WorkQueue {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_drains_then_closes() {
        let (tx, queue) = bounded(3);
        for i in 0..3 {
            tx.send(i).await.unwrap();
        }
        drop(tx);

        let other = queue.clone();
        assert_eq!(queue.next().await, Some(0));
        assert_eq!(other.next().await, Some(1));
        assert_eq!(queue.next().await, Some(2));
        assert_eq!(other.next().await, None);
        assert_eq!(queue.next().await, None);
    }

    #[tokio::test]
    async fn test_zero_capacity_is_bumped() {
        let (tx, queue) = bounded::<u8>(0);
        tx.try_send(1).unwrap();
        drop(tx);
        assert_eq!(queue.next().await, Some(1));
    }
}
