use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use tokio::sync::{Mutex, mpsc};

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

// Inner state the main Mutex protects: one live queue handle per sender key.
struct QueueState {
    senders: HashMap<String, mpsc::UnboundedSender<Job>>,
}

/// Per-sender sequential queues. Jobs enqueued under the same key run one at
/// a time, in enqueue order, on a worker task owned by that key; different
/// keys run independently. Queues are unbounded: arrival bursts pile up
/// rather than block the caller.
pub struct SenderQueues {
    state: Mutex<QueueState>,
}

impl SenderQueues {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                senders: HashMap::new(),
            }),
        }
    }

    /// Enqueue a job on the key's queue, spawning the worker on first use.
    pub async fn enqueue<F>(&self, key: &str, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut job: Job = Box::pin(job);
        let mut state = self.state.lock().await;

        if let Some(tx) = state.senders.get(key) {
            match tx.send(job) {
                Ok(()) => return,
                // Worker is gone (panicked job); replace the queue below.
                Err(mpsc::error::SendError(returned)) => job = returned,
            }
        }

        let tx = spawn_worker();
        // A fresh queue is empty, so this send cannot fail.
        let _ = tx.send(job);
        state.senders.insert(key.to_string(), tx);
    }
}

impl Default for SenderQueues {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_worker() -> mpsc::UnboundedSender<Job> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            job.await;
        }
    });
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn same_key_jobs_run_in_enqueue_order() {
        let queues = SenderQueues::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5u32 {
            let log = log.clone();
            queues
                .enqueue("alice", async move {
                    // The first job sleeps; later jobs must still wait for it.
                    if i == 0 {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                    }
                    log.lock().await.push(i);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*log.lock().await, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn distinct_keys_do_not_block_each_other() {
        let queues = SenderQueues::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let slow_log = log.clone();
        queues
            .enqueue("alice", async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                slow_log.lock().await.push("alice");
            })
            .await;

        let fast_log = log.clone();
        queues
            .enqueue("bob", async move {
                fast_log.lock().await.push("bob");
            })
            .await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*log.lock().await, vec!["bob", "alice"]);
    }
}
