use crate::domain::model::{RawListing, VacancyRecord};
use crate::domain::ports::{ListingSource, VacancyStorage};
use crate::utils::error::Result;
use std::time::Instant;

/// Ingestion: search the source, normalize, replace the stored vacancies.
pub struct EtlEngine<L: ListingSource> {
    source: L,
}

impl<L: ListingSource> EtlEngine<L> {
    pub fn new(source: L) -> Self {
        Self { source }
    }

    pub async fn extract(&self, query: &str) -> Result<Vec<RawListing>> {
        self.source.fetch(query).await
    }

    pub fn transform(&self, listings: &[RawListing]) -> Vec<VacancyRecord> {
        listings.iter().map(VacancyRecord::from_listing).collect()
    }

    /// The store is only cleared once every record is ready.
    pub fn load<S: VacancyStorage>(
        &self,
        storage: &mut S,
        records: Vec<VacancyRecord>,
    ) -> Result<usize> {
        let count = records.len();
        storage.clear();
        storage.add_all(records)?;
        Ok(count)
    }

    /// Returns the number of vacancies now stored.
    pub async fn run<S: VacancyStorage>(&self, storage: &mut S, query: &str) -> Result<usize> {
        let started = Instant::now();
        tracing::info!("🔎 Searching vacancies for '{}'", query);

        let listings = self.extract(query).await?;
        tracing::debug!("Extracted {} listings in {:?}", listings.len(), started.elapsed());

        let records = self.transform(&listings);
        let with_salary = records.iter().filter(|r| r.has_salary()).count();
        tracing::debug!("Normalized {} vacancies, {} with salary", records.len(), with_salary);

        let count = self.load(storage, records)?;
        tracing::info!("✅ Stored {} vacancies in {:?}", count, started.elapsed());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::VacancyFilter;
    use crate::utils::error::VacancyError;
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticSource(Vec<RawListing>);

    #[async_trait]
    impl ListingSource for StaticSource {
        async fn fetch(&self, _query: &str) -> Result<Vec<RawListing>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ListingSource for FailingSource {
        async fn fetch(&self, _query: &str) -> Result<Vec<RawListing>> {
            Err(VacancyError::HttpStatus {
                status: 500,
                url: "http://test".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryStorage {
        vacancies: Vec<VacancyRecord>,
        writes: usize,
    }

    impl VacancyStorage for MemoryStorage {
        fn vacancies(&self) -> &[VacancyRecord] {
            &self.vacancies
        }

        fn add_all(&mut self, records: Vec<VacancyRecord>) -> Result<()> {
            self.vacancies.extend(records);
            self.writes += 1;
            Ok(())
        }

        fn query(&self, filter: &VacancyFilter) -> Vec<VacancyRecord> {
            crate::domain::filter::apply(&self.vacancies, filter)
        }

        fn remove_where(&mut self, filter: &VacancyFilter) -> Result<()> {
            crate::domain::filter::retain_matching(&mut self.vacancies, filter);
            self.writes += 1;
            Ok(())
        }

        fn clear(&mut self) {
            self.vacancies.clear();
        }
    }

    fn listing(name: &str, salary: serde_json::Value) -> RawListing {
        serde_json::from_value(json!({
            "name": name,
            "alternate_url": format!("https://hh.ru/{}", name),
            "salary": salary,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_replaces_stored_vacancies() {
        let engine = EtlEngine::new(StaticSource(vec![
            listing("rust", json!({"value": 300000})),
            listing("go", json!(null)),
        ]));
        let mut storage = MemoryStorage::default();
        storage
            .add_all(vec![VacancyRecord::new("old", "u", "1", "")])
            .unwrap();

        let count = engine.run(&mut storage, "developer").await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.vacancies()[0].title, "rust");
        assert_eq!(storage.vacancies()[0].salary_display, "300000");
        assert!(!storage.vacancies()[1].has_salary());
        assert_eq!(storage.writes, 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_existing_vacancies() {
        let engine = EtlEngine::new(FailingSource);
        let mut storage = MemoryStorage::default();
        storage
            .add_all(vec![VacancyRecord::new("old", "u", "1", "")])
            .unwrap();

        let result = engine.run(&mut storage, "developer").await;

        assert!(matches!(result, Err(VacancyError::HttpStatus { status: 500, .. })));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.writes, 1);
    }
}
