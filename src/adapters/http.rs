use crate::config::toml_config::SourceConfig;
use crate::domain::model::{RawListing, SearchPage};
use crate::domain::ports::ListingSource;
use crate::utils::error::{Result, VacancyError};
use async_trait::async_trait;
use reqwest::Client;

/// Search client for the hh.ru vacancies endpoint.
pub struct HeadHunterClient {
    client: Client,
    config: SourceConfig,
}

impl HeadHunterClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage> {
        let params = [
            ("text", query.to_string()),
            ("page", page.to_string()),
            ("per_page", self.config.per_page.to_string()),
        ];

        tracing::debug!("Requesting page {} from {}", page, self.config.endpoint);
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VacancyError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ListingSource for HeadHunterClient {
    async fn fetch(&self, query: &str) -> Result<Vec<RawListing>> {
        let mut listings = Vec::new();

        for page in 0..self.config.max_pages {
            let result = self.fetch_page(query, page).await?;
            tracing::debug!(
                "Page {} returned {} items (pages = {:?})",
                page,
                result.items.len(),
                result.pages
            );
            let is_last = result.is_last();
            listings.extend(result.items);

            if is_last {
                break;
            }
        }

        tracing::info!("Fetched {} listings for '{}'", listings.len(), query);
        Ok(listings)
    }
}
