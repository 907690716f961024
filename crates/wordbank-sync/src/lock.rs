use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

const PRUNE_THRESHOLD: usize = 1024;

/// One async mutex per word, created on demand.
///
/// Entries are held weakly, so a word's lock disappears once nobody holds or
/// waits on it.
#[derive(Default)]
pub struct WordLocks {
    locks: Mutex<HashMap<String, Weak<AsyncMutex<()>>>>,
}

impl WordLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other task holds `word`, then hold it until the guard drops
    pub async fn lock(&self, word: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);

            match locks.get(word).and_then(Weak::upgrade) {
                Some(existing) => existing,
                None => {
                    let fresh = Arc::new(AsyncMutex::new(()));
                    locks.insert(word.to_string(), Arc::downgrade(&fresh));
                    if locks.len() > PRUNE_THRESHOLD {
                        locks.retain(|_, weak| weak.strong_count() > 0);
                    }
                    fresh
                }
            }
        };

        lock.lock_owned().await
    }

    /// Words currently held or waited on
    pub fn in_flight(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
