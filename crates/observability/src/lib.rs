//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing with an `info` default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize tracing with `default_filter` unless `RUST_LOG` is set.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
