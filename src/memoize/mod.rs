//! Memoizing call caches.
//!
//! ┌ [`Memoize`]     : `&mut self` calls, single owner
//! ├ [`SyncMemoize`] : `&self` calls behind a `parking_lot::Mutex`
//! ├ [`memoize`]     : wraps a function into a caching closure
//! └ [`FloatKey`]    : hashable `f64` argument

pub mod cache;
pub mod key;
pub mod sync;

pub use cache::{memoize, Memoize};
pub use key::FloatKey;
pub use sync::SyncMemoize;
