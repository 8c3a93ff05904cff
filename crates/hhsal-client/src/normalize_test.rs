use super::*;
use crate::types::{MetroStation, Named};

fn salary(from: Option<f64>, to: Option<f64>, currency: &str) -> Salary {
    Salary {
        from,
        to,
        currency: Some(currency.to_owned()),
    }
}

fn address(lat: Option<f64>, lng: Option<f64>, metro: Option<(Option<f64>, Option<f64>)>) -> Address {
    Address {
        raw: Some("Москва, Ленинский проспект, 10".to_owned()),
        lat,
        lng,
        metro: metro.map(|(lat, lng)| MetroStation { lat, lng }),
    }
}

// -----------------------------------------------------------------------
// derive_salary
// -----------------------------------------------------------------------

#[test]
fn mean_is_midpoint_when_both_bounds_present() {
    let fields = derive_salary(Some(&salary(Some(100_000.0), Some(120_000.0), "RUR")));
    assert_eq!(
        fields,
        SalaryFields {
            min: Some(100_000.0),
            max: Some(120_000.0),
            mean: Some(110_000.0)
        }
    );
}

#[test]
fn mean_keeps_fractional_midpoint() {
    let fields = derive_salary(Some(&salary(Some(50_000.0), Some(50_001.0), "RUR")));
    assert_eq!(fields.mean, Some(50_000.5));
}

#[test]
fn mean_equals_lower_bound_when_only_lower_present() {
    let fields = derive_salary(Some(&salary(Some(70_000.0), None, "RUR")));
    assert_eq!(fields.min, Some(70_000.0));
    assert_eq!(fields.max, None);
    assert_eq!(fields.mean, Some(70_000.0));
}

#[test]
fn mean_equals_upper_bound_when_only_upper_present() {
    let fields = derive_salary(Some(&salary(None, Some(90_000.0), "RUR")));
    assert_eq!(fields.mean, Some(90_000.0));
}

#[test]
fn zero_lower_bound_is_a_real_value() {
    let fields = derive_salary(Some(&salary(Some(0.0), None, "RUR")));
    assert_eq!(fields.mean, Some(0.0));
}

#[test]
fn no_bounds_yields_no_mean() {
    assert_eq!(
        derive_salary(Some(&salary(None, None, "RUR"))),
        SalaryFields::default()
    );
}

#[test]
fn foreign_currency_drops_all_salary_fields() {
    assert_eq!(
        derive_salary(Some(&salary(Some(3_000.0), Some(4_000.0), "USD"))),
        SalaryFields::default()
    );
}

#[test]
fn missing_currency_drops_all_salary_fields() {
    let block = Salary {
        from: Some(100_000.0),
        to: None,
        currency: None,
    };
    assert_eq!(derive_salary(Some(&block)), SalaryFields::default());
}

#[test]
fn missing_block_drops_all_salary_fields() {
    assert_eq!(derive_salary(None), SalaryFields::default());
}

// -----------------------------------------------------------------------
// derive_coordinates
// -----------------------------------------------------------------------

#[test]
fn address_coordinates_win_over_metro() {
    let addr = address(Some(55.70), Some(37.58), Some((Some(55.71), Some(37.59))));
    assert_eq!(derive_coordinates(Some(&addr)), Some((55.70, 37.58)));
}

#[test]
fn metro_pair_substitutes_missing_address_latitude() {
    let addr = address(None, Some(37.58), Some((Some(55.71), Some(37.59))));
    assert_eq!(derive_coordinates(Some(&addr)), Some((55.71, 37.59)));
}

#[test]
fn zero_latitude_does_not_trigger_fallback() {
    let addr = address(Some(0.0), Some(0.0), Some((Some(55.71), Some(37.59))));
    assert_eq!(derive_coordinates(Some(&addr)), Some((0.0, 0.0)));
}

#[test]
fn address_latitude_without_longitude_is_not_mixed_with_metro() {
    let addr = address(Some(55.70), None, Some((Some(55.71), Some(37.59))));
    assert_eq!(derive_coordinates(Some(&addr)), None);
}

#[test]
fn metro_without_latitude_yields_nothing() {
    let addr = address(None, None, Some((None, Some(37.59))));
    assert_eq!(derive_coordinates(Some(&addr)), None);
}

#[test]
fn no_address_yields_nothing() {
    assert_eq!(derive_coordinates(None), None);
}

// -----------------------------------------------------------------------
// normalize_vacancy
// -----------------------------------------------------------------------

#[test]
fn normalize_copies_text_fields() {
    let item = VacancyItem {
        name: Some("Администратор-кассир".to_owned()),
        alternate_url: Some("https://hh.ru/vacancy/7".to_owned()),
        employer: Some(Named {
            name: Some("МЕДСИ".to_owned()),
        }),
        area: Some(Named {
            name: Some("Москва".to_owned()),
        }),
        salary: Some(salary(Some(60_000.0), Some(80_000.0), "RUR")),
        address: Some(address(None, None, Some((Some(55.71), Some(37.59))))),
    };

    let record = normalize_vacancy(item);
    assert_eq!(record.title.as_deref(), Some("Администратор-кассир"));
    assert_eq!(record.employer.as_deref(), Some("МЕДСИ"));
    assert_eq!(record.area_name.as_deref(), Some("Москва"));
    assert_eq!(record.url.as_deref(), Some("https://hh.ru/vacancy/7"));
    assert_eq!(
        record.address_raw.as_deref(),
        Some("Москва, Ленинский проспект, 10")
    );
    assert_eq!(record.salary_mean, Some(70_000.0));
    assert_eq!(record.latitude, Some(55.71));
    assert_eq!(record.longitude, Some(37.59));
}

#[test]
fn normalize_empty_item_is_all_absent() {
    let record = normalize_vacancy(VacancyItem::default());
    assert_eq!(record, VacancyRecord::default());
}

#[test]
fn normalize_foreign_salary_has_no_reference_value() {
    let item = VacancyItem {
        salary: Some(salary(Some(2_000.0), Some(3_000.0), "EUR")),
        ..VacancyItem::default()
    };
    let record = normalize_vacancy(item);
    assert_eq!(record.salary_min, None);
    assert_eq!(record.salary_max, None);
    assert_eq!(record.salary_mean, None);
    assert_eq!(record.reference_salary(), None);
}
