//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::filter::AdvocateFilter;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateReader, AdvocateWriter};

mock! {
    pub Repository {}

    impl AdvocateReader for Repository {
        fn list(&self, filter: &AdvocateFilter) -> RepositoryResult<(usize, Vec<Advocate>)>;
        fn list_all(&self) -> RepositoryResult<Vec<Advocate>>;
    }

    impl AdvocateWriter for Repository {
        fn create(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>>;
    }
}
