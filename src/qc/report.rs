use crate::utils::{QcError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

pub const QC_SHEET: &str = "QC";
pub const NAME_COLUMN: &str = "Name";
pub const MIN_DEPTH_COLUMN: &str = "Min depth";

/// Rows above the column header in the QC sheet.
const SKIP_ROWS: u32 = 3;
/// Only columns A:D are read.
const USED_COLUMNS: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct QcRow {
    /// 1-based row number in the sheet, for error messages.
    pub sheet_row: u32,
    pub name: Data,
    pub min_depth: Data,
}

impl QcRow {
    pub fn exon_name(&self) -> Result<String> {
        match &self.name {
            Data::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            other => Err(QcError::Parse(format!(
                "Row {}: invalid exon name {:?}",
                self.sheet_row, other
            ))),
        }
    }

    /// Minimum depth coerced to an integer; fractional values truncate.
    pub fn min_depth(&self) -> Result<i64> {
        let err = || {
            QcError::Parse(format!(
                "Row {}: '{}' is not an integer depth: {:?}",
                self.sheet_row, MIN_DEPTH_COLUMN, self.min_depth
            ))
        };
        match &self.min_depth {
            Data::Int(v) => Ok(*v),
            Data::Float(v) if v.is_finite() => Ok(v.trunc() as i64),
            Data::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .or_else(|_| {
                        s.parse::<f64>()
                            .ok()
                            .filter(|v| v.is_finite())
                            .map(|v| v.trunc() as i64)
                            .ok_or(())
                    })
                    .map_err(|_| err())
            }
            _ => Err(err()),
        }
    }
}

/// The data rows of one report's QC section, indexed from the first row
/// below the column header.
#[derive(Debug, Clone, PartialEq)]
pub struct QcTable {
    pub source: String,
    rows: Vec<QcRow>,
}

impl QcTable {
    pub fn from_range(source: &str, range: &Range<Data>) -> Result<Self> {
        let header_row = SKIP_ROWS;
        let header_cell = |col: u32| range.get_value((header_row, col));
        let find_column = |label: &str| {
            (0..USED_COLUMNS)
                .find(|&col| {
                    matches!(header_cell(col), Some(Data::String(s)) if s.trim() == label)
                })
                .ok_or_else(|| {
                    QcError::Parse(format!(
                        "{}: column '{}' not found in the '{}' header",
                        source, label, QC_SHEET
                    ))
                })
        };
        let name_col = find_column(NAME_COLUMN)?;
        let depth_col = find_column(MIN_DEPTH_COLUMN)?;

        let last_row = range.end().map_or(0, |(row, _)| row);
        let cell = |row: u32, col: u32| range.get_value((row, col)).cloned().unwrap_or(Data::Empty);

        let rows = (header_row + 1..=last_row)
            .filter(|&row| {
                (0..USED_COLUMNS).any(|col| !matches!(cell(row, col), Data::Empty))
            })
            .map(|row| QcRow {
                sheet_row: row + 1,
                name: cell(row, name_col),
                min_depth: cell(row, depth_col),
            })
            .collect();

        Ok(Self {
            source: source.to_string(),
            rows,
        })
    }

    pub fn row(&self, index: usize) -> Result<&QcRow> {
        self.rows.get(index).ok_or_else(|| {
            QcError::Parse(format!(
                "{}: expected at least {} rows in '{}', found {}",
                self.source,
                index + 1,
                QC_SHEET,
                self.rows.len()
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn read_report(dir: &Path, file: &str) -> Result<QcTable> {
    let path = dir.join(file);
    let mut workbook = open_workbook_auto(&path)
        .map_err(|e| QcError::Parse(format!("{}: {}", path.display(), e)))?;
    if !workbook.sheet_names().iter().any(|name| name == QC_SHEET) {
        return Err(QcError::Parse(format!(
            "{}: sheet '{}' not found",
            path.display(),
            QC_SHEET
        )));
    }
    let range = workbook
        .worksheet_range(QC_SHEET)
        .map_err(|e| QcError::Parse(format!("{}: {}", path.display(), e)))?;
    let table = QcTable::from_range(file, &range)?;
    log::debug!("{}: {} QC rows", file, table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qc::fixtures::{write_report, write_workbook, ReportFixture};

    #[test]
    fn read_report_rows_indexed_from_header() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = ReportFixture::passing().with_depth("BRCA1_exon2", 12);
        write_report(&dir.path().join("C01s1b.xlsx"), &fixture);

        let table = read_report(dir.path(), "C01s1b.xlsx").unwrap();
        assert_eq!(table.len(), 48);
        let first = table.row(0).unwrap();
        assert_eq!(first.exon_name().unwrap(), "BRCA1_exon2");
        assert_eq!(first.min_depth().unwrap(), 12);
        assert_eq!(first.sheet_row, 5);
        assert_eq!(table.row(23).unwrap().exon_name().unwrap(), "BRCA2_exon2");
    }

    #[test]
    fn read_report_missing_sheet_err() {
        let dir = tempfile::tempdir().unwrap();
        write_workbook(&dir.path().join("C01s1b.xlsx"), "Summary", &[]);
        let result = read_report(dir.path(), "C01s1b.xlsx");
        assert!(matches!(result, Err(QcError::Parse(msg)) if msg.contains("sheet 'QC'")));
    }

    #[test]
    fn read_report_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_report(dir.path(), "C01absentb.xlsx");
        assert!(matches!(result, Err(QcError::Parse(_))));
    }

    #[test]
    fn read_report_missing_depth_column_err() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            vec!["title"],
            vec![],
            vec![],
            vec!["Name", "Chr", "Mean depth"],
            vec!["BRCA1_exon2", "17", "80"],
        ];
        write_workbook(&dir.path().join("C01s1b.xlsx"), QC_SHEET, &rows);
        let result = read_report(dir.path(), "C01s1b.xlsx");
        assert!(matches!(result, Err(QcError::Parse(msg)) if msg.contains("Min depth")));
    }

    #[test]
    fn row_beyond_table_err() {
        let dir = tempfile::tempdir().unwrap();
        write_report(&dir.path().join("C01s1b.xlsx"), &ReportFixture::passing());
        let table = read_report(dir.path(), "C01s1b.xlsx").unwrap();
        assert!(matches!(table.row(48), Err(QcError::Parse(_))));
    }

    fn row_with_depth(min_depth: Data) -> QcRow {
        QcRow {
            sheet_row: 5,
            name: Data::String("BRCA1_exon2".into()),
            min_depth,
        }
    }

    #[test]
    fn min_depth_coercion() {
        assert_eq!(row_with_depth(Data::Int(30)).min_depth().unwrap(), 30);
        assert_eq!(row_with_depth(Data::Float(29.9)).min_depth().unwrap(), 29);
        assert_eq!(
            row_with_depth(Data::String(" 45 ".into())).min_depth().unwrap(),
            45
        );
        assert_eq!(
            row_with_depth(Data::String("31.5".into())).min_depth().unwrap(),
            31
        );
    }

    #[test]
    fn min_depth_non_numeric_err() {
        for value in [Data::Empty, Data::String("n/a".into()), Data::Bool(true)] {
            assert!(matches!(
                row_with_depth(value).min_depth(),
                Err(QcError::Parse(_))
            ));
        }
    }

    #[test]
    fn exon_name_empty_err() {
        let row = QcRow {
            sheet_row: 7,
            name: Data::Empty,
            min_depth: Data::Int(40),
        };
        assert!(matches!(row.exon_name(), Err(QcError::Parse(_))));
    }
}
