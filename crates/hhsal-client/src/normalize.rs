//! Normalization from raw listing items to [`hhsal_core::VacancyRecord`].

use hhsal_core::{VacancyRecord, RECOGNIZED_CURRENCY};

use crate::types::{Address, Salary, VacancyItem};

/// Salary fields derived from a listing's salary block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryFields {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Converts a raw [`VacancyItem`] into a [`VacancyRecord`].
///
/// Never fails: anything missing or unusable in the item is carried as `None`.
#[must_use]
pub fn normalize_vacancy(item: VacancyItem) -> VacancyRecord {
    let salary = derive_salary(item.salary.as_ref());
    let address_raw = item.address.as_ref().and_then(|a| a.raw.clone());
    let (latitude, longitude) = derive_coordinates(item.address.as_ref()).unzip();

    VacancyRecord {
        title: item.name,
        employer: item.employer.and_then(|e| e.name),
        area_name: item.area.and_then(|a| a.name),
        salary_min: salary.min,
        salary_max: salary.max,
        salary_mean: salary.mean,
        url: item.alternate_url,
        address_raw,
        latitude,
        longitude,
    }
}

/// Derives min/max/mean from a salary block.
///
/// Only blocks quoted in [`RECOGNIZED_CURRENCY`] count; anything else yields
/// all-absent fields. The mean is the midpoint when both bounds are known,
/// otherwise the single known bound.
#[must_use]
pub fn derive_salary(salary: Option<&Salary>) -> SalaryFields {
    let Some(salary) = salary else {
        return SalaryFields::default();
    };
    if salary.currency.as_deref() != Some(RECOGNIZED_CURRENCY) {
        return SalaryFields::default();
    }

    let mean = match (salary.from, salary.to) {
        (Some(min), Some(max)) => Some((min + max) / 2.0),
        (min, max) => min.or(max),
    };

    SalaryFields {
        min: salary.from,
        max: salary.to,
        mean,
    }
}

/// Picks the coordinate pair for a listing.
///
/// The address pair is used when the address has a latitude. Otherwise the
/// metro station pair is used if the station has a latitude. A pair is only
/// returned when both halves come from the same source.
#[must_use]
pub fn derive_coordinates(address: Option<&Address>) -> Option<(f64, f64)> {
    let address = address?;
    if address.lat.is_some() {
        return address.lat.zip(address.lng);
    }

    let metro = address.metro.as_ref()?;
    metro.lat.zip(metro.lng)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
