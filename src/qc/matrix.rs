use crate::qc::classify::{ExonCall, FailIndicator};
use crate::utils::{QcError, Result};
use std::collections::HashMap;

pub const TOTAL_COLUMN: &str = "Total";

/// Exon-by-sample grid of fail indicators. A `None` cell was never
/// classified and is distinct from a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExonMatrix {
    exons: Vec<String>,
    samples: Vec<String>,
    exon_index: HashMap<String, usize>,
    cells: Vec<Vec<Option<FailIndicator>>>,
}

impl ExonMatrix {
    pub fn new(exons: Vec<String>, samples: Vec<String>) -> Self {
        let exon_index = exons
            .iter()
            .enumerate()
            .map(|(i, exon)| (exon.clone(), i))
            .collect();
        let cells = vec![vec![None; samples.len()]; exons.len()];
        Self {
            exons,
            samples,
            exon_index,
            cells,
        }
    }

    pub fn exons(&self) -> &[String] {
        &self.exons
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    fn sample_index(&self, sample: &str) -> Result<usize> {
        self.samples
            .iter()
            .position(|s| s == sample)
            .ok_or_else(|| QcError::Configuration(format!("Sample {} is not in the matrix", sample)))
    }

    pub fn set(&mut self, exon: &str, sample: &str, indicator: FailIndicator) -> Result<()> {
        let col = self.sample_index(sample)?;
        let row = *self.exon_index.get(exon).ok_or_else(|| {
            QcError::Parse(format!(
                "{}: exon {} is not in the reference exon list",
                sample, exon
            ))
        })?;
        self.cells[row][col] = Some(indicator);
        Ok(())
    }

    pub fn record_calls(&mut self, sample: &str, calls: &[ExonCall]) -> Result<()> {
        for call in calls {
            self.set(&call.exon, sample, call.indicator)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, exon: &str, sample: &str) -> Option<FailIndicator> {
        let row = *self.exon_index.get(exon)?;
        let col = self.samples.iter().position(|s| s == sample)?;
        self.cells[row][col]
    }

    pub fn row(&self, exon_idx: usize) -> &[Option<FailIndicator>] {
        &self.cells[exon_idx]
    }

    /// Number of failing samples per exon, in exon order. Unset cells count
    /// as zero.
    pub fn totals(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|row| row.iter().flatten().map(FailIndicator::value).sum())
            .collect()
    }

    #[cfg(test)]
    pub fn total(&self, exon: &str) -> Option<u32> {
        let row = *self.exon_index.get(exon)?;
        Some(self.cells[row].iter().flatten().map(FailIndicator::value).sum())
    }

    pub fn unset_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qc::panel::Panel;

    fn matrix(samples: &[&str]) -> ExonMatrix {
        ExonMatrix::new(
            Panel::brca().unwrap().exons(),
            samples.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn new_matrix_is_unset() {
        let m = matrix(&["A", "B"]);
        assert_eq!(m.exons().len(), 46);
        assert_eq!(m.unset_count(), 92);
        assert_eq!(m.get("BRCA1_exon2", "A"), None);
        assert!(m.totals().iter().all(|&t| t == 0));
    }

    #[test]
    fn totals_sum_sample_columns() {
        let mut m = matrix(&["A", "B"]);
        m.set("BRCA1_exon2", "A", FailIndicator::Fail).unwrap();
        m.set("BRCA1_exon2", "B", FailIndicator::Pass).unwrap();
        m.set("BRCA2_exon11", "A", FailIndicator::Fail).unwrap();
        m.set("BRCA2_exon11", "B", FailIndicator::Fail).unwrap();

        assert_eq!(m.get("BRCA1_exon2", "A"), Some(FailIndicator::Fail));
        assert_eq!(m.get("BRCA1_exon2", "B"), Some(FailIndicator::Pass));
        assert_eq!(m.total("BRCA1_exon2"), Some(1));
        assert_eq!(m.total("BRCA2_exon11"), Some(2));
        assert_eq!(m.total("BRCA1_exon3"), Some(0));
        assert_eq!(m.totals().iter().sum::<u32>(), 3);
    }

    #[test]
    fn set_unknown_exon_err() {
        let mut m = matrix(&["A"]);
        assert!(matches!(
            m.set("BRCA1_exon4", "A", FailIndicator::Pass),
            Err(QcError::Parse(_))
        ));
    }

    #[test]
    fn set_unknown_sample_err() {
        let mut m = matrix(&["A"]);
        assert!(matches!(
            m.set("BRCA1_exon2", "Z", FailIndicator::Pass),
            Err(QcError::Configuration(_))
        ));
    }

    #[test]
    fn exon_rows_independent_of_sample_count() {
        let empty = matrix(&[]);
        let many = matrix(&["A", "B", "C", "D"]);
        assert_eq!(empty.exons(), many.exons());
        assert_eq!(empty.totals().len(), 46);
    }
}
