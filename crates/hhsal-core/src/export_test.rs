use super::*;

fn full_record() -> VacancyRecord {
    VacancyRecord {
        title: Some("Администратор".to_owned()),
        employer: Some("МЕДСИ".to_owned()),
        area_name: Some("Москва".to_owned()),
        salary_min: Some(100_000.0),
        salary_max: Some(120_001.0),
        salary_mean: Some(110_000.5),
        url: Some("https://hh.ru/vacancy/1".to_owned()),
        address_raw: Some("Москва, Тверская улица, 1".to_owned()),
        latitude: Some(55.75),
        longitude: Some(37.61),
    }
}

// -----------------------------------------------------------------------
// sanitize_sheet_name
// -----------------------------------------------------------------------

#[test]
fn long_title_with_colon_is_truncated_and_stripped() {
    let title = "Vacancies: administrator cashier Moscow";
    assert_eq!(title.chars().count(), 39);
    let name = sanitize_sheet_name(&format!("{title}!"));
    assert!(name.chars().count() <= MAX_SHEET_NAME_CHARS, "{name}");
    assert!(!name.contains(':'));
    assert_eq!(name, "Vacancies administrator cashier");
}

#[test]
fn cyrillic_titles_are_counted_in_characters() {
    let name = sanitize_sheet_name("Вакансии администратор-кассир клиники");
    assert_eq!(name.chars().count(), MAX_SHEET_NAME_CHARS);
    assert_eq!(name, "Вакансии администратор-кассир к");
}

#[test]
fn all_forbidden_characters_are_removed() {
    assert_eq!(sanitize_sheet_name("a:b\\c/d?e*f[g]h"), "abcdefgh");
}

#[test]
fn short_titles_are_kept() {
    assert_eq!(sanitize_sheet_name("Vacancies медси"), "Vacancies медси");
}

#[test]
fn surrounding_whitespace_and_apostrophes_are_trimmed() {
    assert_eq!(sanitize_sheet_name("  'report'  "), "report");
}

#[test]
fn truncation_does_not_leave_trailing_space() {
    // 30 chars followed by a space at position 31.
    let title = format!("{} tail", "x".repeat(30));
    assert_eq!(sanitize_sheet_name(&title), "x".repeat(30));
}

#[test]
fn empty_result_falls_back_to_default_name() {
    assert_eq!(sanitize_sheet_name(":::"), "Sheet1");
    assert_eq!(sanitize_sheet_name(""), "Sheet1");
}

// -----------------------------------------------------------------------
// to_tabular_rows
// -----------------------------------------------------------------------

#[test]
fn header_has_fixed_column_order() {
    let doc = to_tabular_rows(&ResultSet::new("x"), "Vacancies x");
    assert_eq!(
        doc.header,
        vec![
            "Title",
            "Employer",
            "City",
            "salary_min",
            "salary_max",
            "salary_mean",
            "URL",
            "address_raw",
            "latitude",
            "longitude"
        ]
    );
    assert!(doc.rows.is_empty());
    assert_eq!(doc.sheet_name, "Vacancies x");
}

#[test]
fn data_row_rounds_only_salary_mean() {
    let mut rows = ResultSet::new("x");
    rows.push(full_record());
    let doc = to_tabular_rows(&rows, "x");

    assert_eq!(
        doc.rows[0],
        vec![
            Cell::Text("Администратор".to_owned()),
            Cell::Text("МЕДСИ".to_owned()),
            Cell::Text("Москва".to_owned()),
            Cell::Number(100_000.0),
            Cell::Number(120_001.0),
            Cell::Integer(110_001),
            Cell::Text("https://hh.ru/vacancy/1".to_owned()),
            Cell::Text("Москва, Тверская улица, 1".to_owned()),
            Cell::Number(55.75),
            Cell::Number(37.61),
        ]
    );
}

#[test]
fn absent_fields_become_empty_cells() {
    let mut rows = ResultSet::new("x");
    rows.push(VacancyRecord::default());
    let doc = to_tabular_rows(&rows, "x");
    assert_eq!(doc.rows[0].len(), HEADER.len());
    assert!(doc.rows[0].iter().all(|c| *c == Cell::Empty));
}

#[test]
fn rows_follow_result_set_order() {
    let mut rows = ResultSet::new("x");
    for title in ["first", "second", "third"] {
        rows.push(VacancyRecord {
            title: Some(title.to_owned()),
            ..VacancyRecord::default()
        });
    }
    let doc = to_tabular_rows(&rows, "x");
    let titles: Vec<&Cell> = doc.rows.iter().map(|r| &r[0]).collect();
    assert_eq!(
        titles,
        vec![
            &Cell::Text("first".to_owned()),
            &Cell::Text("second".to_owned()),
            &Cell::Text("third".to_owned())
        ]
    );
}
