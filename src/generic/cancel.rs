//! A flag shared between threads, to request cooperative cancellation.
//!
//! ```rust
//! # use portfolio_sat::generic::cancel::CancelToken;
//! let token = CancelToken::default();
//! let observer = token.clone();
//!
//! assert!(!observer.is_cancelled());
//! token.cancel();
//! assert!(observer.is_cancelled());
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A clonable handle to a shared cancellation flag.
///
/// Once cancelled, a token stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag, for every clone of the token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
