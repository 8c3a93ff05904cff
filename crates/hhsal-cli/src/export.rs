//! Spreadsheet export sink: serializes a [`TabularDocument`] to `.xlsx` bytes.

use hhsal_core::{to_tabular_rows, Cell, ResultSet, TabularDocument, XLSX_MIME_TYPE};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};

/// A downloadable export: file name, declared MIME type, and content.
#[derive(Debug)]
pub(crate) struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Shapes `results` and writes them into an in-memory workbook.
pub(crate) fn build_artifact(results: &ResultSet) -> Result<ExportArtifact, XlsxError> {
    let text = results.search_text();
    let document = to_tabular_rows(results, &format!("Vacancies {text}"));
    Ok(ExportArtifact {
        file_name: export_file_name(text),
        mime_type: XLSX_MIME_TYPE,
        bytes: write_xlsx(&document)?,
    })
}

/// Suggested file name, `vacancies_<search_text>.xlsx`, with path separators
/// replaced so the name stays a single path component.
pub(crate) fn export_file_name(search_text: &str) -> String {
    let safe: String = search_text
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("vacancies_{safe}.xlsx")
}

/// Writes `document` as a single-sheet workbook with a bold header row.
pub(crate) fn write_xlsx(document: &TabularDocument) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&document.sheet_name)?;

    let bold = Format::new().set_bold();
    for (col, title) in document.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, title, &bold)?;
    }

    for (idx, row) in document.rows.iter().enumerate() {
        let row_num = RowNum::try_from(idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in row.iter().enumerate() {
            let col = col_num(col)?;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_num, col, *value)?;
                }
                Cell::Integer(value) => {
                    #[allow(clippy::cast_precision_loss)]
                    worksheet.write_number(row_num, col, *value as f64)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save_to_buffer()
}

fn col_num(col: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}
