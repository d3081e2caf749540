use crate::utils::error::{Result, VacancyError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://api.hh.ru/vacancies";
pub const DEFAULT_USER_AGENT: &str = "HH-User-Agent";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_STORAGE_PATH: &str = "vacancies.json";

/// Largest page size the search API accepts.
const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VacancyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VacancyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_non_empty_string("source.user_agent", &self.source.user_agent)?;
        validation::validate_range("source.per_page", self.source.per_page, 1, MAX_PER_PAGE)?;
        let max_pages = self.source.max_pages as usize;
        validation::validate_positive_number("source.max_pages", max_pages, 1)?;
        validation::validate_path("storage.path", &self.storage.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source.per_page, 100);
        assert_eq!(config.source.max_pages, 20);
        assert_eq!(config.storage.path, "vacancies.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "http://localhost:9000/vacancies"
user_agent = "test-agent"
per_page = 50
max_pages = 3

[storage]
path = "data/jobs.json"

[logging]
format = "json"
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "http://localhost:9000/vacancies");
        assert_eq!(config.source.user_agent, "test-agent");
        assert_eq!(config.source.per_page, 50);
        assert_eq!(config.source.max_pages, 3);
        assert_eq!(config.storage.path, "data/jobs.json");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACANCY_ETL_TEST_STORE", "/tmp/from-env.json");

        let toml_content = r#"
[storage]
path = "${VACANCY_ETL_TEST_STORE}"

[source]
user_agent = "${VACANCY_ETL_UNSET_VARIABLE}"
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.storage.path, "/tmp/from-env.json");
        assert_eq!(config.source.user_agent, "${VACANCY_ETL_UNSET_VARIABLE}");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[source\nendpoint =").unwrap_err();
        assert!(matches!(err, VacancyError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.source.per_page = 500;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.source.max_pages = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.source.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nmax_pages = 5").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.source.max_pages, 5);
        assert_eq!(config.source.per_page, DEFAULT_PER_PAGE);
    }
}
