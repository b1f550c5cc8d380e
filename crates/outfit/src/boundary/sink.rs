//! Diagnostic sinks for captured faults.

use tracing::error;

use crate::runtime::CapturedFault;

/// Receives every fault an [`ErrorBoundary`](super::ErrorBoundary) captures.
///
/// Reporting is best-effort. A sink that panics is contained by the boundary
/// and the fallback still renders.
pub trait FaultSink {
    fn report(&self, fault: &CapturedFault);
}

/// The default sink: one structured `tracing` error event per fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FaultSink for TracingSink {
    fn report(&self, fault: &CapturedFault) {
        error!(
            component = fault.origin().component().unwrap_or("<root>"),
            stack = %fault.origin(),
            "render fault captured: {}",
            fault.message()
        );
    }
}

impl<F> FaultSink for F
where
    F: Fn(&CapturedFault),
{
    fn report(&self, fault: &CapturedFault) {
        self(fault)
    }
}
