use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config pointed at the public listings API.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let api_base_url = or_default("HHSAL_API_BASE_URL", "https://api.hh.ru/vacancies");
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(invalid(
            "HHSAL_API_BASE_URL",
            format!("expected an http(s) URL, got \"{api_base_url}\""),
        ));
    }

    let area = or_default("HHSAL_AREA", "1");
    if area.trim().is_empty() {
        return Err(invalid("HHSAL_AREA", "must not be empty".to_string()));
    }

    let user_agent = or_default("HHSAL_USER_AGENT", "hhsal/0.1 (salary-report)");
    let request_timeout_secs = parse_u64("HHSAL_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_page_delay_ms = parse_u64("HHSAL_INTER_PAGE_DELAY_MS", "400")?;
    let log_level = or_default("HHSAL_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("HHSAL_OUTPUT_DIR", "."));
    let preview_rows = parse_usize("HHSAL_PREVIEW_ROWS", "20")?;

    let histogram_bins = parse_usize("HHSAL_HISTOGRAM_BINS", "15")?;
    if histogram_bins == 0 {
        return Err(invalid(
            "HHSAL_HISTOGRAM_BINS",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        api_base_url,
        area,
        user_agent,
        request_timeout_secs,
        inter_page_delay_ms,
        log_level,
        output_dir,
        preview_rows,
        histogram_bins,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
