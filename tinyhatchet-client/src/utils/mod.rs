//! Utility modules.

/// RFC 3339 helpers for search bounds and entry timestamps.
pub mod datetime;

/// Log sanitization utilities to keep credentials out of the log file.
pub mod log_sanitizer;
