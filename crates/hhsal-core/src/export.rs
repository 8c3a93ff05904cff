//! Shaping a [`ResultSet`] into a header-plus-rows document for spreadsheet
//! export.
//!
//! The document is a plain value; turning it into bytes is the job of an
//! export sink.

use crate::vacancies::{ResultSet, VacancyRecord};

/// MIME type declared for the downloadable spreadsheet.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Maximum worksheet name length accepted by the spreadsheet format.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Characters the spreadsheet format rejects in worksheet names.
const FORBIDDEN_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

const FALLBACK_SHEET_NAME: &str = "Sheet1";

/// Fixed export column order.
pub const HEADER: [&str; 10] = [
    "Title",
    "Employer",
    "City",
    "salary_min",
    "salary_max",
    "salary_mean",
    "URL",
    "address_raw",
    "latitude",
    "longitude",
];

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Empty,
}

impl Cell {
    fn text(value: Option<&str>) -> Self {
        value.map_or(Cell::Empty, |s| Cell::Text(s.to_owned()))
    }

    fn number(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn rounded(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, |v| Cell::Integer(v.round() as i64))
    }
}

/// Header row plus one data row per record, under a sanitized sheet name.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDocument {
    pub sheet_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Builds the export document for `rows`, preserving retrieval order.
#[must_use]
pub fn to_tabular_rows(rows: &ResultSet, sheet_title: &str) -> TabularDocument {
    TabularDocument {
        sheet_name: sanitize_sheet_name(sheet_title),
        header: HEADER.iter().map(|h| (*h).to_owned()).collect(),
        rows: rows.records().iter().map(record_row).collect(),
    }
}

fn record_row(record: &VacancyRecord) -> Vec<Cell> {
    vec![
        Cell::text(record.title.as_deref()),
        Cell::text(record.employer.as_deref()),
        Cell::text(record.area_name.as_deref()),
        Cell::number(record.salary_min),
        Cell::number(record.salary_max),
        Cell::rounded(record.salary_mean),
        Cell::text(record.url.as_deref()),
        Cell::text(record.address_raw.as_deref()),
        Cell::number(record.latitude),
        Cell::number(record.longitude),
    ]
}

/// Makes `title` a valid worksheet name: forbidden characters are stripped,
/// surrounding whitespace and apostrophes trimmed, and the result cut to
/// [`MAX_SHEET_NAME_CHARS`] characters. Falls back to `Sheet1` when nothing
/// usable remains.
#[must_use]
pub fn sanitize_sheet_name(title: &str) -> String {
    let stripped: String = title
        .chars()
        .filter(|c| !FORBIDDEN_SHEET_CHARS.contains(c))
        .collect();
    let trimmed = stripped.trim().trim_matches('\'').trim();
    let truncated: String = trimmed.chars().take(MAX_SHEET_NAME_CHARS).collect();
    let name = truncated.trim_end().trim_end_matches('\'');

    if name.is_empty() {
        FALLBACK_SHEET_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
