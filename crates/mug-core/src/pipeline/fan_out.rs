//! Bounded fan-out of blocking work onto the tokio blocking pool.
//!
//! Keeps up to `limit` tasks in flight; when one finishes the next queued item
//! is started until the queue is empty. The loop draining `join_next_with_id`
//! is the only place results are collected, so no shared container is needed.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::{Id, JoinSet};

/// Runs `work` once per item and returns `(key, result)` for every item.
/// A task that panics or is cancelled is turned into a result by `on_panic`,
/// so every key is reported exactly once.
pub(crate) async fn run_all<I, T, K, W, P>(
    items: Vec<I>,
    limit: usize,
    key_of: K,
    work: W,
    on_panic: P,
) -> Vec<(String, T)>
where
    I: Send + 'static,
    T: Send + 'static,
    K: Fn(&I) -> String,
    W: Fn(I) -> T + Send + Sync + 'static,
    P: Fn(&str, String) -> T,
{
    let limit = limit.max(1);
    let work = Arc::new(work);
    let mut queue = items.into_iter();
    let mut results = Vec::with_capacity(queue.len());
    let mut keys: HashMap<Id, String> = HashMap::new();
    let mut join_set = JoinSet::new();

    loop {
        while join_set.len() < limit {
            let Some(item) = queue.next() else {
                break;
            };
            let key = key_of(&item);
            let work = Arc::clone(&work);
            let handle = join_set.spawn_blocking(move || (*work)(item));
            keys.insert(handle.id(), key);
        }

        let Some(joined) = join_set.join_next_with_id().await else {
            break;
        };
        let (id, res) = match joined {
            Ok((id, value)) => (id, Ok(value)),
            Err(e) => (e.id(), Err(e.to_string())),
        };
        let Some(key) = keys.remove(&id) else {
            tracing::error!(task = %id, "finished task has no key");
            continue;
        };
        match res {
            Ok(value) => results.push((key, value)),
            Err(reason) => {
                tracing::error!(key = %key, %reason, "pipeline task failed");
                let value = on_panic(&key, reason);
                results.push((key, value));
            }
        }
    }

    results
}
