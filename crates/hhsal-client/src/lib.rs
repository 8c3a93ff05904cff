pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{HhClient, MAX_PAGES, PER_PAGE};
pub use error::ClientError;
pub use normalize::normalize_vacancy;
pub use types::{SearchPage, VacancyItem};
