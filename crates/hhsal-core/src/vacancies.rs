//! Normalized vacancy listings and the per-fetch result set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only currency code salary math is performed on. Listings quoted in any
/// other currency are treated as carrying no salary.
pub const RECOGNIZED_CURRENCY: &str = "RUR";

/// One vacancy listing after field extraction and salary/coordinate derivation.
///
/// Every field degrades to `None` when the source listing omits it or carries
/// a malformed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: Option<String>,
    pub employer: Option<String>,
    /// City or region name, e.g. `"Москва"`.
    pub area_name: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Midpoint of the two bounds, or the single bound when only one is known.
    pub salary_mean: Option<f64>,
    /// Public listing page.
    pub url: Option<String>,
    pub address_raw: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl VacancyRecord {
    /// Value this record contributes to the salary-ceiling histogram.
    ///
    /// The upper bound wins; the lower bound is used only when no upper bound
    /// is known.
    #[must_use]
    pub fn reference_salary(&self) -> Option<f64> {
        self.salary_max.or(self.salary_min)
    }
}

/// Records collected by one fetch, in retrieval order, plus the parallel
/// reference-salary series used for the histogram.
///
/// Records are append-only: once pushed they are never modified, and the
/// reference series is derived at push time so both stay consistent.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    search_text: String,
    found: Option<u64>,
    fetched_at: DateTime<Utc>,
    records: Vec<VacancyRecord>,
    reference_salaries: Vec<f64>,
}

impl ResultSet {
    #[must_use]
    pub fn new(search_text: &str) -> Self {
        Self {
            search_text: search_text.to_owned(),
            found: None,
            fetched_at: Utc::now(),
            records: Vec::new(),
            reference_salaries: Vec::new(),
        }
    }

    /// Appends a record, extending the reference series when the record has a
    /// salary ceiling or point value.
    pub fn push(&mut self, record: VacancyRecord) {
        if let Some(reference) = record.reference_salary() {
            self.reference_salaries.push(reference);
        }
        self.records.push(record);
    }

    /// Records the total match count reported by the API.
    pub fn set_found(&mut self, found: Option<u64>) {
        self.found = found;
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn found(&self) -> Option<u64> {
        self.found
    }

    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    #[must_use]
    pub fn records(&self) -> &[VacancyRecord] {
        &self.records
    }

    #[must_use]
    pub fn reference_salaries(&self) -> &[f64] {
        &self.reference_salaries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
