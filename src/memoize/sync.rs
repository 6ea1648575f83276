//! Thread-safe memoizing wrapper.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;


/// [`super::Memoize`] behind a mutex, callable through `&self` from many threads.
///
/// The wrapped function runs outside the lock, so two threads missing on
/// the same argument may both evaluate it; the first stored result wins
/// and both callers receive it.
pub struct SyncMemoize<A, R, F> {
    func:   F,
    cache:  Mutex<HashMap<A, R>>,
    misses: AtomicUsize,
}

impl<A, R, F> SyncMemoize<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    pub fn new(func: F) -> Self {
        Self { func, cache: Mutex::new(HashMap::new()), misses: AtomicUsize::new(0) }
    }

    pub fn call(&self, args: A) -> R {
        if let Some(v) = self.cache.lock().get(&args) {
            return v.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let v = (self.func)(args.clone());

        let mut cache = self.cache.lock();
        trace!(cached = cache.len(), "memo miss");
        cache.entry(args).or_insert(v).clone()
    }

    pub fn contains(&self, args: &A) -> bool { self.cache.lock().contains_key(args) }
    pub fn len(&self) -> usize { self.cache.lock().len() }
    pub fn is_empty(&self) -> bool { self.cache.lock().is_empty() }

    /// Number of times the wrapped function was evaluated.
    pub fn misses(&self) -> usize { self.misses.load(Ordering::Relaxed) }
}

impl<A, R, F> std::fmt::Debug for SyncMemoize<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncMemoize")
            .field("len", &self.cache.lock().len())
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}
