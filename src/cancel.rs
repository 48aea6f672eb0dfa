//! View-scoped cancellation
//!
//! Async work started by a view checks the token before touching
//! that view's state; the view cancels it from `on_cleanup`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set when the owning view is torn down
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
