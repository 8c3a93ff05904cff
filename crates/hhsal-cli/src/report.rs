//! The `fetch` command: runs the fetch, prints the report, writes the export.
//!
//! Nothing is printed or written when the fetch fails; the error propagates
//! to `main`.

use std::io::Write;

use anyhow::Context;
use hhsal_client::HhClient;
use hhsal_core::{
    format_rub, mean_salary, AppConfig, FilterField, ResultSet, SalaryAggregate, VacancyRecord,
};

use crate::export;
use crate::histogram::Histogram;

const TEXT_COLUMN_WIDTH: usize = 32;

#[derive(Debug)]
pub(crate) struct FetchOptions {
    pub text: String,
    pub title_filter: Option<String>,
    pub employer_filter: Option<String>,
    pub export: bool,
    pub json: bool,
}

pub(crate) async fn run_fetch(config: &AppConfig, options: &FetchOptions) -> anyhow::Result<()> {
    let client = HhClient::from_config(config).context("failed to build listings client")?;
    let results = client
        .fetch_vacancies(&options.text, config.inter_page_delay_ms)
        .await
        .with_context(|| format!("failed to fetch vacancies for \"{}\"", options.text))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    render_overview(&mut out, &results, config, options.json)?;

    if options.export {
        let artifact = export::build_artifact(&results).context("failed to build spreadsheet")?;
        let path = config.output_dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "export written");
        writeln!(out, "\nSaved {} ({})", path.display(), artifact.mime_type)?;
    }

    render_means(
        &mut out,
        &results,
        options.title_filter.as_deref(),
        options.employer_filter.as_deref(),
    )?;

    Ok(())
}

/// Writes the record count, the preview (table or JSON lines), and the
/// salary-ceiling histogram.
pub(crate) fn render_overview(
    out: &mut impl Write,
    results: &ResultSet,
    config: &AppConfig,
    json: bool,
) -> anyhow::Result<()> {
    write!(out, "Fetched {} vacancies", results.len())?;
    if let Some(found) = results.found() {
        write!(out, " ({found} reported by the API)")?;
    }
    writeln!(
        out,
        " at {}",
        results.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    if json {
        for record in results.records() {
            writeln!(out, "{}", serde_json::to_string(record)?)?;
        }
    } else if !results.is_empty() {
        writeln!(out, "\nPreview")?;
        render_preview(out, results.records(), config.preview_rows)?;
    }

    if let Some(histogram) =
        Histogram::from_values(results.reference_salaries(), config.histogram_bins)
    {
        writeln!(out, "\nSalary ceilings (RUR)")?;
        histogram.render(out)?;
    }

    Ok(())
}

/// Writes the first `limit` records as an aligned table.
pub(crate) fn render_preview(
    out: &mut impl Write,
    records: &[VacancyRecord],
    limit: usize,
) -> std::io::Result<()> {
    let w = TEXT_COLUMN_WIDTH;
    writeln!(
        out,
        "{:<w$}  {:<w$}  {:<16}  {:>10}  {:>10}  {:>10}",
        "Title", "Employer", "City", "salary_min", "salary_max", "salary_mean"
    )?;
    for record in records.iter().take(limit) {
        writeln!(
            out,
            "{:<w$}  {:<w$}  {:<16}  {:>10}  {:>10}  {:>10}",
            clip(record.title.as_deref(), w),
            clip(record.employer.as_deref(), w),
            clip(record.area_name.as_deref(), 16),
            amount(record.salary_min),
            amount(record.salary_max),
            amount(record.salary_mean),
        )?;
    }
    if records.len() > limit {
        writeln!(out, "... {} more", records.len() - limit)?;
    }
    Ok(())
}

/// Writes the filtered means requested on the command line.
pub(crate) fn render_means(
    out: &mut impl Write,
    results: &ResultSet,
    title_filter: Option<&str>,
    employer_filter: Option<&str>,
) -> std::io::Result<()> {
    if let Some(pattern) = title_filter {
        let aggregate = mean_salary(results, FilterField::Title, pattern);
        writeln!(out, "\n{}", describe_mean("Market mean", pattern, aggregate))?;
    }
    if let Some(pattern) = employer_filter {
        let aggregate = mean_salary(results, FilterField::Employer, pattern);
        writeln!(out, "\n{}", describe_mean("Employer mean", pattern, aggregate))?;
    }
    Ok(())
}

fn describe_mean(label: &str, pattern: &str, aggregate: SalaryAggregate) -> String {
    match aggregate {
        SalaryAggregate::Mean { value, sample_size } => {
            format!(
                "{label} for \"{pattern}\": {} ({sample_size} vacancies)",
                format_rub(value)
            )
        }
        SalaryAggregate::NoData => format!("{label} for \"{pattern}\": no salaries specified."),
    }
}

fn clip(text: Option<&str>, width: usize) -> String {
    let text = text.unwrap_or("");
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn amount(value: Option<f64>) -> String {
    #[allow(clippy::cast_possible_truncation)]
    value.map_or_else(String::new, |v| (v.round() as i64).to_string())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
