//! Ctrl-C handling
//!
//! The handler only raises a flag; the generation loop polls it between words
//! so the output always ends on a whole line.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared interrupt flag
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag wired to SIGINT / Ctrl-C.
    ///
    /// If the handler cannot be installed the default signal behaviour stays
    /// in place and the returned flag is never raised.
    pub fn install() -> Self {
        let flag = Self::new();
        let handler_flag = flag.clone();
        if let Err(e) = ctrlc::set_handler(move || handler_flag.raise()) {
            log::warn!("Could not install Ctrl-C handler: {}", e);
        }
        flag
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}
