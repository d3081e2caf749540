use crate::domain::model::VacancyRecord;

/// Options recognized by queries and removals. Unset options are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyFilter {
    pub keyword: Option<String>,
    pub top_n: Option<usize>,
    /// Narrows keyword matches to the description. Ignored without a keyword.
    pub description_only: bool,
}

impl VacancyFilter {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn top(n: usize) -> Self {
        Self {
            top_n: Some(n),
            ..Self::default()
        }
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn in_description(mut self) -> Self {
        self.description_only = true;
        self
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive match against title or description.
pub fn mentions(record: &VacancyRecord, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    contains_ci(&record.title, &needle) || contains_ci(&record.description, &needle)
}

/// Stable sort, highest salary first.
pub fn sort_by_salary_desc(records: &mut [VacancyRecord]) {
    records.sort_by(|a, b| b.cmp_salary(a));
}

/// Applies keyword, then top-N, then description-only.
pub fn apply(records: &[VacancyRecord], filter: &VacancyFilter) -> Vec<VacancyRecord> {
    let mut selected: Vec<VacancyRecord> = match &filter.keyword {
        Some(keyword) => records
            .iter()
            .filter(|record| mentions(record, keyword))
            .cloned()
            .collect(),
        None => records.to_vec(),
    };

    if let Some(n) = filter.top_n {
        sort_by_salary_desc(&mut selected);
        selected.truncate(n);
    }

    if filter.description_only {
        if let Some(keyword) = &filter.keyword {
            let needle = keyword.to_lowercase();
            selected.retain(|record| contains_ci(&record.description, &needle));
        }
    }

    selected
}

/// Keeps only the records mentioning the filter keyword. No keyword keeps everything.
pub fn retain_matching(records: &mut Vec<VacancyRecord>, filter: &VacancyFilter) {
    if let Some(keyword) = &filter.keyword {
        records.retain(|record| mentions(record, keyword));
    }
}
