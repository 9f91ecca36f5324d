//! Synthetic per-sample reports for tests.

use crate::qc::panel::REFERENCE_EXONS;
use rust_xlsxwriter::Workbook;
use std::{collections::HashMap, path::Path};

pub struct ReportFixture {
    depths: HashMap<String, f64>,
    renamed: HashMap<usize, String>,
    data_rows: Option<usize>,
}

impl ReportFixture {
    pub fn passing() -> Self {
        Self {
            depths: HashMap::new(),
            renamed: HashMap::new(),
            data_rows: None,
        }
    }

    pub fn with_depth(mut self, exon: &str, depth: i64) -> Self {
        self.depths.insert(exon.to_string(), depth as f64);
        self
    }

    /// Replaces the name written at a data row.
    pub fn with_name_at(mut self, row: usize, name: &str) -> Self {
        self.renamed.insert(row, name.to_string());
        self
    }

    /// Writes only the first `n` data rows.
    pub fn truncated(mut self, n: usize) -> Self {
        self.data_rows = Some(n);
        self
    }

    fn data(&self) -> Vec<(String, f64)> {
        let (brca1, brca2) = REFERENCE_EXONS.split_at(21);
        let exon_row = |exon: &&str| {
            let depth = self.depths.get(*exon).copied().unwrap_or(100.0);
            (exon.to_string(), depth)
        };
        let mut rows: Vec<(String, f64)> = brca1.iter().map(exon_row).collect();
        rows.push(("BRCA1 total".to_string(), 100.0));
        rows.push(("BRCA2".to_string(), 100.0));
        rows.extend(brca2.iter().map(exon_row));
        for (row, name) in &self.renamed {
            rows[*row].0 = name.clone();
        }
        if let Some(n) = self.data_rows {
            rows.truncate(n);
        }
        rows
    }
}

pub fn write_report(path: &Path, fixture: &ReportFixture) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("QC").unwrap();
    sheet.write_string(0, 0, "Coverage report").unwrap();
    sheet.write_string(1, 0, "Panel: BRCA").unwrap();
    sheet.write_string(2, 0, "Minimum depth threshold: 30").unwrap();
    for (col, label) in ["Name", "Chromosome", "Min depth", "Mean depth"]
        .iter()
        .enumerate()
    {
        sheet.write_string(3, col as u16, *label).unwrap();
    }
    for (i, (name, depth)) in fixture.data().iter().enumerate() {
        let row = 4 + i as u32;
        sheet.write_string(row, 0, name).unwrap();
        sheet.write_string(row, 1, "17").unwrap();
        sheet.write_number(row, 2, *depth).unwrap();
        sheet.write_number(row, 3, *depth + 50.0).unwrap();
    }
    workbook.save(path).unwrap();
}

pub fn write_workbook(path: &Path, sheet_name: &str, rows: &[Vec<&str>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save(path).unwrap();
}
