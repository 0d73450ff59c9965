//! Logging infrastructure for cellkey.
//!
//! cellkey uses `tracing` for structured logging. All events use target
//! "cellkey" and include an `event` field for filtering.
//!
//! ## Library Integration
//!
//! cellkey never initializes a global subscriber. The host pipeline
//! configures tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "mapper", "adapter")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all cellkey log events.
pub(crate) const CELLKEY_TARGET: &str = "cellkey";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "adapter",
///     event = "column_skipped",
///     family = %BinaryDisplay(family),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::CELLKEY_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::CELLKEY_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
