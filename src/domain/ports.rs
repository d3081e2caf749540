use crate::domain::filter::VacancyFilter;
use crate::domain::model::{RawListing, VacancyRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Paginated search for raw listings.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<RawListing>>;
}

/// An ordered vacancy collection kept in sync with a backing store.
///
/// Every mutating method except [`VacancyStorage::clear`] persists before returning.
pub trait VacancyStorage {
    fn vacancies(&self) -> &[VacancyRecord];

    fn add_all(&mut self, records: Vec<VacancyRecord>) -> Result<()>;

    fn query(&self, filter: &VacancyFilter) -> Vec<VacancyRecord>;

    /// Drops every record the keyword does not mention, then persists.
    fn remove_where(&mut self, filter: &VacancyFilter) -> Result<()>;

    /// Empties the in-memory collection without touching the backing store.
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.vacancies().len()
    }

    fn is_empty(&self) -> bool {
        self.vacancies().is_empty()
    }
}
