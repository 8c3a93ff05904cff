use std::path::PathBuf;

/// Runtime settings for a report session, read from `HHSAL_*` env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search endpoint, e.g. `https://api.hh.ru/vacancies`.
    pub api_base_url: String,
    /// Region code sent as the `area` query parameter.
    pub area: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Pause between successive page requests.
    pub inter_page_delay_ms: u64,
    pub log_level: String,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
    pub histogram_bins: usize,
}
