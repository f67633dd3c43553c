use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::domain::filter::AdvocateFilter;
use crate::services::advocates::AdvocatePage;

/// Error code surfaced when a configured database cannot answer a read.
pub const DATABASE_QUERY_FAILED: &str = "database_query_failed";

/// Raw query parameters for the listing endpoint. Everything deserializes
/// as an optional string so malformed input reaches the normalizer
/// instead of failing at the transport layer.
#[derive(Debug, Default, Deserialize)]
pub struct AdvocatesQueryParams {
    pub q: Option<String>,
    pub city: Option<String>,
    /// Comma-separated specialty tokens.
    pub specialties: Option<String>,
    #[serde(rename = "minExperience")]
    pub min_experience: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl AdvocatesQueryParams {
    pub fn to_filter(&self) -> AdvocateFilter {
        AdvocateFilter::from_params(
            self.q.as_deref(),
            self.city.as_deref(),
            self.specialties.as_deref(),
            self.min_experience.as_deref(),
            self.sort.as_deref(),
            self.page.as_deref(),
            self.page_size.as_deref(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Which backend answered the request.
pub enum DataSource {
    Database,
    Seed,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_next_page: bool,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AdvocateListResponse {
    pub data: Vec<Advocate>,
    pub meta: PageMeta,
}

impl AdvocateListResponse {
    pub fn new(
        page: AdvocatePage,
        filter: &AdvocateFilter,
        source: DataSource,
        duration_ms: Option<f64>,
    ) -> Self {
        Self {
            meta: PageMeta {
                page: filter.page,
                page_size: filter.page_size,
                total: page.total,
                has_next_page: filter.page.saturating_mul(filter.page_size) < page.total,
                source,
                duration_ms,
            },
            data: page.advocates,
        }
    }
}

#[derive(Debug, Serialize)]
/// Envelope for the unfiltered read-all endpoint. `error` marks a
/// degraded response answered from seed data after a database failure.
pub struct AdvocatesAllResponse {
    pub data: Vec<Advocate>,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub advocates: Vec<Advocate>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ErrorResponse {
    pub fn database_query_failed() -> Self {
        Self {
            error: DATABASE_QUERY_FAILED,
            message: Some("Failed to query the advocates table. Check server logs."),
        }
    }

    pub fn seed_failed() -> Self {
        Self {
            error: "Failed to seed the advocates table. Check server logs for details.",
            message: None,
        }
    }
}
