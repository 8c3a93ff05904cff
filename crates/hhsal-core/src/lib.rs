pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod export;
pub mod format;
pub mod vacancies;

pub use aggregate::{mean_salary, FilterField, SalaryAggregate};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use export::{sanitize_sheet_name, to_tabular_rows, Cell, TabularDocument, XLSX_MIME_TYPE};
pub use format::format_rub;
pub use vacancies::{ResultSet, VacancyRecord, RECOGNIZED_CURRENCY};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
