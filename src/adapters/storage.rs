use crate::domain::filter::{self, VacancyFilter};
use crate::domain::model::VacancyRecord;
use crate::domain::ports::VacancyStorage;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Vacancies stored as a pretty-printed JSON array, rewritten in full on every change.
#[derive(Debug)]
pub struct JsonVacancyStorage {
    path: PathBuf,
    vacancies: Vec<VacancyRecord>,
}

impl JsonVacancyStorage {
    /// Loads the file at `path`. A missing or unreadable-as-JSON file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let vacancies = load_vacancies(&path)?;
        tracing::debug!("Loaded {} vacancies from {}", vacancies.len(), path.display());
        Ok(Self { path, vacancies })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.vacancies)?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            "Saved {} vacancies to {}",
            self.vacancies.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn load_vacancies(path: &Path) -> Result<Vec<VacancyRecord>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice(&bytes) {
        Ok(vacancies) => Ok(vacancies),
        Err(e) => {
            tracing::debug!("Ignoring malformed store {}: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

impl VacancyStorage for JsonVacancyStorage {
    fn vacancies(&self) -> &[VacancyRecord] {
        &self.vacancies
    }

    fn add_all(&mut self, records: Vec<VacancyRecord>) -> Result<()> {
        self.vacancies.extend(records);
        self.persist()
    }

    fn query(&self, filter: &VacancyFilter) -> Vec<VacancyRecord> {
        filter::apply(&self.vacancies, filter)
    }

    fn remove_where(&mut self, filter: &VacancyFilter) -> Result<()> {
        let before = self.vacancies.len();
        filter::retain_matching(&mut self.vacancies, filter);
        tracing::debug!("Removed {} vacancies", before - self.vacancies.len());
        self.persist()
    }

    fn clear(&mut self) {
        self.vacancies.clear();
    }
}
