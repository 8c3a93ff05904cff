//! Filtered salary means over a [`ResultSet`].

use crate::vacancies::{ResultSet, VacancyRecord};

/// Text field a filter pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Title,
    Employer,
}

impl FilterField {
    fn value(self, record: &VacancyRecord) -> Option<&str> {
        match self {
            FilterField::Title => record.title.as_deref(),
            FilterField::Employer => record.employer.as_deref(),
        }
    }
}

/// Outcome of a filtered mean query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryAggregate {
    /// Unrounded arithmetic mean of `sample_size` salary means.
    Mean { value: f64, sample_size: usize },
    /// No matching record carried a usable salary.
    NoData,
}

impl SalaryAggregate {
    /// Mean rounded to a whole number, for display only.
    #[must_use]
    pub fn rounded(&self) -> Option<i64> {
        match self {
            #[allow(clippy::cast_possible_truncation)]
            SalaryAggregate::Mean { value, .. } => Some(value.round() as i64),
            SalaryAggregate::NoData => None,
        }
    }
}

/// Returns `true` when `haystack` contains `pattern`, ignoring case.
///
/// Case folding is Unicode-aware so Cyrillic titles match upper-case patterns.
#[must_use]
pub fn contains_ignore_case(haystack: &str, pattern: &str) -> bool {
    haystack.to_lowercase().contains(&pattern.to_lowercase())
}

/// Mean `salary_mean` over records whose `field` contains `pattern`
/// (case-insensitive literal substring). Records with the field absent never
/// match; matched records without a salary are skipped.
#[must_use]
pub fn mean_salary(rows: &ResultSet, field: FilterField, pattern: &str) -> SalaryAggregate {
    let values: Vec<f64> = rows
        .records()
        .iter()
        .filter(|record| {
            field
                .value(record)
                .is_some_and(|text| contains_ignore_case(text, pattern))
        })
        .filter_map(|record| record.salary_mean)
        .collect();

    if values.is_empty() {
        return SalaryAggregate::NoData;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = values.iter().sum::<f64>() / values.len() as f64;
    SalaryAggregate::Mean {
        value,
        sample_size: values.len(),
    }
}
