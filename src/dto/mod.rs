//! DTOs exposed by the directory API endpoints.

pub mod advocates;
