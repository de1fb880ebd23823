//! Optional dispatch hooks.
//!
//! A [`Dispatcher`](crate::Dispatcher) built with an observer reports every
//! tensor-level call after it finishes, and every call it rejects. Kernel
//! bodies never report anything.

use tracing::{debug, warn};

use crate::error::BlasError;

/// Summary of one completed tensor-level call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEvent {
    /// Operation name, e.g. `"axpy"` or `"scal_col"`.
    pub op: &'static str,
    /// Name of the backend that ran the kernels.
    pub backend: &'static str,
    /// Elements processed across all kernel calls.
    pub elements: usize,
    /// Number of strided-vector kernel invocations.
    pub kernel_calls: usize,
}

/// Receiver of dispatch events.
pub trait Observer: Send + Sync {
    /// Called after a call completed successfully.
    fn on_dispatch(&self, event: &DispatchEvent);

    /// Called when a call was rejected.
    fn on_error(&self, op: &'static str, error: &BlasError);
}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_dispatch(&self, event: &DispatchEvent) {
        debug!(
            op = event.op,
            backend = event.backend,
            elements = event.elements,
            kernel_calls = event.kernel_calls,
            "level1 dispatch"
        );
    }

    fn on_error(&self, op: &'static str, error: &BlasError) {
        warn!(op, %error, "level1 call rejected");
    }
}
