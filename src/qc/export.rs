use crate::qc::locator::RunSummary;
use crate::qc::matrix::{ExonMatrix, TOTAL_COLUMN};
use crate::utils::{create_writer, QcError, Result};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::{path::Path, str::FromStr};

pub const SHEET_NAME: &str = "Run exon qc";
pub const QUALIFYING_LABEL: &str = "BRCA Samples";
pub const OTHER_LABEL: &str = "Other Samples";

const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;
/// Columns A:AZ.
const LAST_SIZED_COLUMN: u16 = 51;
const COLUMN_WIDTH: f64 = 18.0;

/// How positive cells are emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Background,
    Font,
}

impl FromStr for Highlight {
    type Err = &'static str;
    fn from_str(style: &str) -> std::result::Result<Self, Self::Err> {
        match style {
            "background" => Ok(Highlight::Background),
            "font" => Ok(Highlight::Font),
            _ => Err("Invalid highlight. Options are: background, font"),
        }
    }
}

impl Highlight {
    fn format(&self) -> Format {
        match self {
            Highlight::Background => Format::new().set_background_color(Color::Red),
            Highlight::Font => Format::new().set_font_color(Color::Red),
        }
    }
}

/// Positive counts carry the highlight; zeros are written plain.
fn cell_format(value: u32, positive: &Format) -> Option<&Format> {
    (value > 0).then_some(positive)
}

fn write_count(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: u32,
    positive: &Format,
) -> std::result::Result<(), XlsxError> {
    match cell_format(value, positive) {
        Some(format) => sheet.write_number_with_format(row, col, value, format)?,
        None => sheet.write_number(row, col, value)?,
    };
    Ok(())
}

fn xlsx_err(e: XlsxError) -> QcError {
    QcError::OutputWrite(e.to_string())
}

pub fn build_workbook(
    matrix: &ExonMatrix,
    summary: &RunSummary,
    highlight: Highlight,
) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    fill_worksheet(&mut workbook, matrix, summary, highlight).map_err(xlsx_err)?;
    Ok(workbook)
}

fn fill_worksheet(
    workbook: &mut Workbook,
    matrix: &ExonMatrix,
    summary: &RunSummary,
    highlight: Highlight,
) -> std::result::Result<(), XlsxError> {
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let positive = highlight.format();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    sheet.write_string(0, 0, QUALIFYING_LABEL)?;
    sheet.write_number(0, 1, summary.qualifying as f64)?;
    sheet.write_string(0, 2, OTHER_LABEL)?;
    sheet.write_number(0, 3, summary.other as f64)?;

    let total_col = matrix.samples().len() as u16 + 1;
    for (i, sample) in matrix.samples().iter().enumerate() {
        sheet.write_string_with_format(HEADER_ROW, i as u16 + 1, sample, &header)?;
    }
    sheet.write_string_with_format(HEADER_ROW, total_col, TOTAL_COLUMN, &header)?;

    let totals = matrix.totals();
    for (exon_idx, exon) in matrix.exons().iter().enumerate() {
        let row = FIRST_DATA_ROW + exon_idx as u32;
        sheet.write_string_with_format(row, 0, exon, &header)?;
        for (i, cell) in matrix.row(exon_idx).iter().enumerate() {
            if let Some(indicator) = cell {
                write_count(sheet, row, i as u16 + 1, indicator.value(), &positive)?;
            }
        }
        write_count(sheet, row, total_col, totals[exon_idx], &positive)?;
    }

    for col in 0..=LAST_SIZED_COLUMN {
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }
    Ok(())
}

/// Writes the run report to `path`. Nothing is left at `path` on failure.
pub fn write_report(
    path: &Path,
    matrix: &ExonMatrix,
    summary: &RunSummary,
    highlight: Highlight,
) -> Result<()> {
    let mut workbook = build_workbook(matrix, summary, highlight)?;
    create_writer(path, |file| workbook.save_to_writer(file).map_err(xlsx_err))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
