pub mod etl;
pub mod menu;

pub use crate::domain::filter::VacancyFilter;
pub use crate::domain::model::{RawListing, VacancyRecord};
pub use crate::domain::ports::{ListingSource, VacancyStorage};
pub use crate::utils::error::Result;
