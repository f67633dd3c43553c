//! Storage abstraction for the directory.
//!
//! Both backends answer the same question: "give me page N of records
//! matching filter F sorted by S, plus the total match count". Handlers
//! pick an implementation once per request and hand it to the service
//! layer; nothing downstream branches on the backend again.

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::filter::AdvocateFilter;
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod seed;

pub trait AdvocateReader {
    /// Filtered, ordered page plus the total count of matching records
    /// before slicing.
    fn list(&self, filter: &AdvocateFilter) -> RepositoryResult<(usize, Vec<Advocate>)>;

    /// Every record, in stable insertion order.
    fn list_all(&self) -> RepositoryResult<Vec<Advocate>>;
}

pub trait AdvocateWriter {
    /// Bulk-insert records, returning them with assigned ids. Not
    /// idempotent: repeated calls duplicate rows.
    fn create(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>>;
}
