//! Drive disable signal

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering}
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A shared flag which, while asserted, prevents the drive from moving.
///
/// Clones share the same flag. DriveCtrl only ever reads it, at the top of
/// `power` and `tick`.
#[derive(Clone, Debug, Default)]
pub struct DisableSignal(Arc<AtomicBool>);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DisableSignal {
    /// Disable the drive.
    pub fn assert(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Allow the drive to move again.
    pub fn release(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_asserted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
