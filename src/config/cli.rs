use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-etl")]
#[command(about = "Fetch job vacancies, store them as JSON and rank them by salary")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file holding the stored vacancies
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Search API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Runs one operation and exits; without it the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Replace the stored vacancies with the results of a search
    Fetch { query: String },
    /// Show the N best paid vacancies
    Top { n: usize },
    /// Show vacancies whose description mentions a keyword
    Search { keyword: String },
    /// Keep only vacancies mentioning a keyword
    Prune { keyword: String },
    /// Show every stored vacancy
    List,
}

impl CliConfig {
    /// Reads the configuration file if given, then applies command line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.storage_path {
            config.storage.path = path.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        Ok(config)
    }
}
