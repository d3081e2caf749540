pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{HeadHunterClient, JsonVacancyStorage};
pub use crate::config::AppConfig;
pub use crate::core::{etl::EtlEngine, menu::InteractiveMenu};
pub use crate::domain::filter::VacancyFilter;
pub use crate::domain::model::{RawListing, VacancyRecord};
pub use crate::domain::ports::{ListingSource, VacancyStorage};
pub use crate::utils::error::{Result, VacancyError};
