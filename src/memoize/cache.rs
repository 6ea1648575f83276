//! Single-threaded memoizing wrapper.

use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;


/// Wraps a pure function and caches its result per argument.
///
/// Arguments are compared structurally (`Hash + Eq`); several arguments are
/// passed as a tuple. The cache only grows: there is no eviction, and a
/// function that is not referentially transparent will be silently
/// answered from stale entries.
///
/// ```
/// use tributary::memoize::Memoize;
///
/// let mut square = Memoize::new(|x: u64| x * x);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.misses(), 1);
/// ```
pub struct Memoize<A, R, F> {
    func:   F,
    cache:  HashMap<A, R>,
    hits:   usize,
    misses: usize,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    pub fn new(func: F) -> Self {
        Self { func, cache: HashMap::new(), hits: 0, misses: 0 }
    }

    /// Returns the cached result for `args`, evaluating the wrapped
    /// function only on the first call with these arguments.
    pub fn call(&mut self, args: A) -> R {
        if let Some(v) = self.cache.get(&args) {
            self.hits += 1;
            return v.clone();
        }

        self.misses += 1;
        trace!(cached = self.cache.len(), "memo miss");
        let v = (self.func)(args.clone());
        self.cache.insert(args, v.clone());
        v
    }

    pub fn contains(&self, args: &A) -> bool { self.cache.contains_key(args) }

    /// Cached result, without evaluating.
    pub fn get(&self, args: &A) -> Option<&R> { self.cache.get(args) }

    pub fn len(&self) -> usize { self.cache.len() }
    pub fn is_empty(&self) -> bool { self.cache.is_empty() }
    pub fn hits(&self) -> usize { self.hits }
    pub fn misses(&self) -> usize { self.misses }

    /// Unwraps the inner function, dropping the cache.
    pub fn into_inner(self) -> F { self.func }
}

impl<A, R, F> std::fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoize")
            .field("len", &self.cache.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}


/// Memoized closure with the same call signature as `func`.
pub fn memoize<A, R, F>(func: F) -> impl FnMut(A) -> R
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut memo = Memoize::new(func);
    move |args: A| memo.call(args)
}
