use crate::domain::advocate::Advocate;
use crate::domain::filter::AdvocateFilter;
use crate::repository::{AdvocateReader, AdvocateWriter};
use crate::seed;
use crate::services::ServiceResult;

/// One page of the directory plus the full filtered-set cardinality.
#[derive(Debug)]
pub struct AdvocatePage {
    pub total: usize,
    pub advocates: Vec<Advocate>,
}

/// Runs the filter/order/paginate pipeline against whichever backend the
/// caller selected.
pub fn list_advocates<R>(repo: &R, filter: &AdvocateFilter) -> ServiceResult<AdvocatePage>
where
    R: AdvocateReader + ?Sized,
{
    let (total, advocates) = repo.list(filter)?;
    Ok(AdvocatePage { total, advocates })
}

pub fn list_all_advocates<R>(repo: &R) -> ServiceResult<Vec<Advocate>>
where
    R: AdvocateReader + ?Sized,
{
    Ok(repo.list_all()?)
}

/// Bulk-loads the embedded seed dataset. Repeated calls duplicate rows;
/// storage does not enforce uniqueness on this path.
pub fn seed_advocates<R>(repo: &R) -> ServiceResult<Vec<Advocate>>
where
    R: AdvocateWriter + ?Sized,
{
    let inserted = repo.create(&seed::advocates())?;
    log::info!("Inserted {} advocate records", inserted.len());
    Ok(inserted)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn list_advocates_propagates_repository_failures() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("no such table".to_string())));

        let result = list_advocates(&repo, &AdvocateFilter::default());
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::DatabaseError(_)))
        ));
    }

    #[test]
    fn seed_inserts_the_embedded_dataset() {
        let expected = seed::advocates().len();
        let mut repo = MockRepository::new();
        repo.expect_create()
            .times(1)
            .withf(move |records| records.len() == expected)
            .returning(|records| {
                Ok(records.iter().cloned().map(Into::into).collect())
            });

        let inserted = seed_advocates(&repo).unwrap();
        assert_eq!(inserted.len(), expected);
    }
}
