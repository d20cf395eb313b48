//! Tracing/logging setup shared by the GreenScape binaries.

/// Initialize process-wide tracing with the default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_default(tracing::DEFAULT_FILTER);
}

/// Subscriber construction (filters, JSON formatting).
pub mod tracing;
