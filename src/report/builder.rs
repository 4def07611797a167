//! Spreadsheet export of ledger reports.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde::Serialize;
use tracing::{info, warn};

use super::record::{ReportCell, ReportRecord};
use super::request::ReportRequest;
use crate::error::{PayrollError, PayrollResult};
use crate::store::PayrollDb;

/// Result of a report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The query matched nothing and no file was written.
    NoData,
    /// A spreadsheet was written.
    Generated {
        /// File name inside the output directory.
        filename: String,
        /// Full path of the written file.
        path: PathBuf,
        /// Number of data rows, excluding the header.
        rows: usize,
    },
}

/// Writes report spreadsheets into an output directory.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    output_dir: PathBuf,
}

impl ReportBuilder {
    /// Creates a builder writing into `output_dir`. The directory is created
    /// on first export.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Runs the query behind `request` and exports its rows.
    pub fn generate(&self, db: &PayrollDb, request: &ReportRequest) -> PayrollResult<ReportOutcome> {
        let filename = request.filename();

        match request {
            ReportRequest::Monthly { employee_id } => {
                self.export(&filename, &db.monthly_report(*employee_id)?)
            }
            ReportRequest::Summary { employee_id, range } => {
                self.export(&filename, &db.summary_report(*employee_id, *range)?)
            }
            ReportRequest::Range { range } => self.export(&filename, &db.range_report(*range)?),
        }
    }

    /// Writes `records` to `filename` as a single-sheet workbook.
    ///
    /// The first row holds the field names, each record follows on its own
    /// row. An existing file of the same name is overwritten. An empty slice
    /// writes nothing and yields [`ReportOutcome::NoData`].
    pub fn export<R: ReportRecord>(&self, filename: &str, records: &[R]) -> PayrollResult<ReportOutcome> {
        if records.is_empty() {
            info!(filename, "no data for report, nothing written");
            return Ok(ReportOutcome::NoData);
        }

        let path = self.output_dir.join(filename);
        fs::create_dir_all(&self.output_dir).map_err(|e| PayrollError::Export {
            path: self.output_dir.display().to_string(),
            message: e.to_string(),
        })?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        write_table(worksheet, records).map_err(|e| export_error(&path, e))?;
        workbook.save(&path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "report export failed");
            export_error(&path, e)
        })?;

        info!(path = %path.display(), rows = records.len(), "report written");
        Ok(ReportOutcome::Generated {
            filename: filename.to_string(),
            path,
            rows: records.len(),
        })
    }
}

/// A cell of the written sheet, after conversion to spreadsheet values.
#[derive(Debug, Clone, PartialEq)]
enum SheetCell {
    Header(&'static str),
    Number(f64),
    Text(String),
    Amount(f64),
}

/// Lays out `records` as sheet rows: the field names first, then one row per
/// record in the order given.
fn sheet_rows<R: ReportRecord>(records: &[R]) -> Vec<Vec<SheetCell>> {
    let header = R::field_names().iter().copied().map(SheetCell::Header).collect();

    let body = records.iter().map(|record| {
        record
            .cells()
            .into_iter()
            .map(|cell| match cell {
                ReportCell::Integer(value) => SheetCell::Number(value as f64),
                ReportCell::Date(date) => SheetCell::Text(date.to_string()),
                ReportCell::Amount(amount) => SheetCell::Amount(amount.to_f64().unwrap_or_default()),
            })
            .collect()
    });

    std::iter::once(header).chain(body).collect()
}

fn write_table<R: ReportRecord>(worksheet: &mut Worksheet, records: &[R]) -> Result<(), XlsxError> {
    let header_fmt = Format::new().set_bold();
    let amount_fmt = Format::new().set_num_format("0.00");

    for (row, cells) in sheet_rows(records).into_iter().enumerate() {
        let row = row as u32;
        for (col, cell) in cells.into_iter().enumerate() {
            let col = col as u16;
            match cell {
                SheetCell::Header(name) => {
                    worksheet.write_string_with_format(row, col, name, &header_fmt)?;
                }
                SheetCell::Number(value) => {
                    worksheet.write_number(row, col, value)?;
                }
                SheetCell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                SheetCell::Amount(value) => {
                    worksheet.write_number_with_format(row, col, value, &amount_fmt)?;
                }
            }
        }
    }

    Ok(())
}

fn export_error(path: &Path, err: XlsxError) -> PayrollError {
    PayrollError::Export {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
