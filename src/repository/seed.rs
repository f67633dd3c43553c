//! In-memory repository over the embedded seed dataset.
//!
//! Honors the same filter, ordering, and pagination semantics as the
//! Diesel backend; the dual-backend property tests pin the equivalence.

use crate::domain::advocate::Advocate;
use crate::domain::filter::AdvocateFilter;
use crate::repository::errors::RepositoryResult;
use crate::repository::AdvocateReader;
use crate::seed;

/// Read-only [`AdvocateReader`] answering from a fixed record set.
pub struct SeedRepository {
    records: Vec<Advocate>,
}

impl SeedRepository {
    /// Repository over the embedded seed dataset.
    pub fn new() -> Self {
        Self::with_records(seed::advocates().into_iter().map(Into::into).collect())
    }

    /// Repository over an arbitrary record set. Used by tests and by the
    /// equivalence suite.
    pub fn with_records(records: Vec<Advocate>) -> Self {
        Self { records }
    }
}

impl Default for SeedRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvocateReader for SeedRepository {
    fn list(&self, filter: &AdvocateFilter) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let mut matches: Vec<&Advocate> = self
            .records
            .iter()
            .filter(|advocate| filter.matches(advocate))
            .collect();
        let total = matches.len();

        matches.sort_by(|a, b| filter.sort.compare(a, b));

        let page = matches
            .into_iter()
            .skip(filter.offset())
            .take(filter.page_size)
            .cloned()
            .collect();

        Ok((total, page))
    }

    fn list_all(&self) -> RepositoryResult<Vec<Advocate>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::SortOrder;

    #[test]
    fn out_of_range_page_yields_empty_page_with_full_total() {
        let repo = SeedRepository::new();
        let filter = AdvocateFilter {
            page: 100,
            ..AdvocateFilter::default()
        };
        let (total, page) = repo.list(&filter).unwrap();
        assert_eq!(total, seed::advocates().len());
        assert!(page.is_empty());
    }

    #[test]
    fn name_sort_orders_by_last_then_first() {
        let repo = SeedRepository::new();
        let (_, page) = repo
            .list(&AdvocateFilter {
                page_size: 50,
                ..AdvocateFilter::default()
            })
            .unwrap();

        let keys: Vec<(&str, &str)> = page
            .iter()
            .map(|a| (a.last_name.as_str(), a.first_name.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn experience_sort_is_descending() {
        let repo = SeedRepository::new();
        let (_, page) = repo
            .list(&AdvocateFilter {
                sort: SortOrder::Experience,
                page_size: 50,
                ..AdvocateFilter::default()
            })
            .unwrap();

        let years: Vec<i32> = page.iter().map(|a| a.years_of_experience).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }
}
