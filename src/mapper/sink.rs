use super::MapFailure;
use crate::{observability::log_warn, text::BinaryDisplay};

/// Receives values that could not be mapped.
pub trait DiagnosticSink: Send + Sync {
    /// Record one mapping failure. Must not panic.
    fn report(&self, failure: &MapFailure);
}

/// Reports failures as warn-level `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, failure: &MapFailure) {
        log_warn!(
            component = "mapper",
            event = "value_mapping_failed",
            input = %BinaryDisplay(&failure.input),
            target_type = %failure.target,
            error = %failure.reason,
            "error mapping byte value to {}",
            failure.target
        );
    }
}
