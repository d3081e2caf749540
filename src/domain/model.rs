use crate::domain::salary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Number of description characters shown in listings.
const DESCRIPTION_PREVIEW_CHARS: usize = 20;

/// A normalized vacancy as kept in memory and in the JSON store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredVacancy")]
pub struct VacancyRecord {
    pub title: String,
    pub url: String,
    #[serde(rename = "salary")]
    pub salary_display: String,
    pub description: String,
}

/// Shape of one object in the JSON store, before sanitization.
#[derive(Deserialize)]
struct StoredVacancy {
    title: String,
    url: String,
    salary: Option<String>,
    description: String,
}

impl From<StoredVacancy> for VacancyRecord {
    fn from(stored: StoredVacancy) -> Self {
        VacancyRecord::new(
            stored.title,
            stored.url,
            &stored.salary.unwrap_or_default(),
            stored.description,
        )
    }
}

impl VacancyRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary_display: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            salary_display: salary::sanitize(salary_display),
            description: description.into(),
        }
    }

    pub fn from_listing(listing: &RawListing) -> Self {
        Self::new(
            listing.name.clone(),
            listing.alternate_url.clone(),
            &salary::display_from_raw(listing.salary.as_ref()),
            listing.description_text(),
        )
    }

    pub fn salary_key(&self) -> i64 {
        salary::comparable_key(&self.salary_display)
    }

    pub fn has_salary(&self) -> bool {
        !salary::is_sentinel(&self.salary_display)
    }

    /// Orders by salary key only. Every unspecified salary counts as zero.
    pub fn cmp_salary(&self, other: &Self) -> Ordering {
        self.salary_key().cmp(&other.salary_key())
    }
}

impl fmt::Display for VacancyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.title, self.salary_display, self.url)?;
        if !self.description.is_empty() {
            let preview: String = self
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect();
            write!(f, " | {}...", preview)?;
        }
        Ok(())
    }
}

/// One item of the search API `items` array. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawListing {
    pub name: String,
    pub alternate_url: String,
    pub salary: Option<serde_json::Value>,
    pub description: Option<String>,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snippet {
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

impl RawListing {
    /// Full description when present, otherwise the snippet texts.
    pub fn description_text(&self) -> String {
        if let Some(description) = &self.description {
            return description.clone();
        }
        let Some(snippet) = &self.snippet else {
            return String::new();
        };
        [&snippet.requirement, &snippet.responsibility]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub items: Vec<RawListing>,
    /// Total page count; `null` and `0` both end pagination.
    pub pages: Option<u64>,
}

impl SearchPage {
    pub fn is_last(&self) -> bool {
        matches!(self.pages, None | Some(0))
    }
}
