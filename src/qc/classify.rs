use crate::qc::panel::GeneLayout;
use crate::qc::report::QcTable;
use crate::utils::Result;
use std::fmt;

pub const DEFAULT_MIN_DEPTH: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailIndicator {
    Pass,
    Fail,
}

impl FailIndicator {
    pub fn from_depth(min_depth: i64, threshold: i64) -> Self {
        if min_depth < threshold {
            FailIndicator::Fail
        } else {
            FailIndicator::Pass
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            FailIndicator::Pass => 0,
            FailIndicator::Fail => 1,
        }
    }
}

impl fmt::Display for FailIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExonCall {
    pub exon: String,
    pub min_depth: i64,
    pub indicator: FailIndicator,
}

/// Classifies every row of `layout` in the table. Rows are independent; the
/// exon name is taken from the report itself.
pub fn classify_gene(table: &QcTable, layout: &GeneLayout, threshold: i64) -> Result<Vec<ExonCall>> {
    let mut calls = Vec::with_capacity(layout.exons.len());
    for (row_idx, expected) in layout.rows_with_exons() {
        let row = table.row(row_idx)?;
        let exon = row.exon_name()?;
        let min_depth = row.min_depth()?;
        if exon != expected {
            log::warn!(
                "{}: row {} holds {} where {} {} was expected",
                table.source,
                row.sheet_row,
                exon,
                layout.gene,
                expected
            );
        }
        let indicator = FailIndicator::from_depth(min_depth, threshold);
        log::debug!(
            "{}: {} min depth {} -> {}",
            table.source,
            exon,
            min_depth,
            indicator
        );
        calls.push(ExonCall {
            exon,
            min_depth,
            indicator,
        });
    }
    Ok(calls)
}
