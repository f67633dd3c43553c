//! HTTP handlers for the directory API.

pub mod advocates;
pub mod seed;

/// Header reporting the page query's elapsed time, or the literal `seed`
/// when the response was answered from the fallback dataset.
pub const DURATION_HEADER: &str = "X-Request-Duration";
