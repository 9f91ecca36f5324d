use crate::utils::{QcError, Result};
use itertools::Itertools;
use std::{fmt, ops::Range, str::FromStr};

/// Exon names in the order they appear in the per-sample reports.
pub const REFERENCE_EXONS: [&str; 46] = [
    "BRCA1_exon2",
    "BRCA1_exon3",
    "BRCA1_exon5",
    "BRCA1_exon6",
    "BRCA1_exon7",
    "BRCA1_exon8",
    "BRCA1_exon9",
    "BRCA1_exon10",
    "BRCA1_exon11",
    "BRCA1_exon12",
    "BRCA1_exon13",
    "BRCA1_exon14",
    "BRCA1_exon15",
    "BRCA1_exon16",
    "BRCA1_exon17",
    "BRCA1_exon18",
    "BRCA1_exon19",
    "BRCA1_exon20",
    "BRCA1_exon21",
    "BRCA1_exon22",
    "BRCA1_exon23",
    "BRCA2_exon2",
    "BRCA2_exon3",
    "BRCA2_exon4",
    "BRCA2_exon5",
    "BRCA2_exon6",
    "BRCA2_exon7",
    "BRCA2_exon8",
    "BRCA2_exon9",
    "BRCA2_exon10",
    "BRCA2_exon11",
    "BRCA2_exon12",
    "BRCA2_exon13",
    "BRCA2_exon14",
    "BRCA2_exon15",
    "BRCA2_exon16",
    "BRCA2_exon17",
    "BRCA2_exon18",
    "BRCA2_exon19",
    "BRCA2_exon20",
    "BRCA2_exon21",
    "BRCA2_exon22",
    "BRCA2_exon23",
    "BRCA2_exon24",
    "BRCA2_exon25",
    "BRCA2_exon26",
];

const BRCA1_FIRST_ROW: usize = 0;
const BRCA1_EXON_COUNT: usize = 21;
const BRCA2_FIRST_ROW: usize = 23;
const BRCA2_EXON_COUNT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    Brca1,
    Brca2,
}

impl Gene {
    pub const ALL: [Gene; 2] = [Gene::Brca1, Gene::Brca2];

    pub fn label(&self) -> &'static str {
        match self {
            Gene::Brca1 => "BRCA1",
            Gene::Brca2 => "BRCA2",
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gene {
    type Err = QcError;
    fn from_str(gene: &str) -> Result<Self> {
        match gene {
            "BRCA1" => Ok(Gene::Brca1),
            "BRCA2" => Ok(Gene::Brca2),
            _ => Err(QcError::Configuration(format!(
                "Unknown gene selector '{}'. Options are: {}",
                gene,
                Gene::ALL.iter().join(", ")
            ))),
        }
    }
}

/// Where one gene's exons sit in the QC table.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneLayout {
    pub gene: Gene,
    pub first_row: usize,
    pub exons: Vec<String>,
}

impl GeneLayout {
    pub fn new(gene: Gene, first_row: usize, exons: &[&str]) -> Self {
        Self {
            gene,
            first_row,
            exons: exons.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn rows(&self) -> Range<usize> {
        self.first_row..self.first_row + self.exons.len()
    }

    /// Pairs of (table row, expected exon name).
    pub fn rows_with_exons(&self) -> impl Iterator<Item = (usize, &str)> {
        self.rows().zip(self.exons.iter().map(String::as_str))
    }
}

/// Fixed gene to row-range table, checked against the reference exon list on
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    brca1: GeneLayout,
    brca2: GeneLayout,
}

impl Panel {
    pub fn new(brca1: GeneLayout, brca2: GeneLayout, reference: &[&str]) -> Result<Self> {
        let panel = Self { brca1, brca2 };
        panel.validate(reference)?;
        Ok(panel)
    }

    pub fn brca() -> Result<Self> {
        let (brca1_exons, rest) = REFERENCE_EXONS.split_at(BRCA1_EXON_COUNT);
        let brca2_exons = rest.get(..BRCA2_EXON_COUNT).unwrap_or(rest);
        Self::new(
            GeneLayout::new(Gene::Brca1, BRCA1_FIRST_ROW, brca1_exons),
            GeneLayout::new(Gene::Brca2, BRCA2_FIRST_ROW, brca2_exons),
            &REFERENCE_EXONS,
        )
    }

    pub fn layout(&self, gene: Gene) -> &GeneLayout {
        match gene {
            Gene::Brca1 => &self.brca1,
            Gene::Brca2 => &self.brca2,
        }
    }

    pub fn layouts(&self) -> impl Iterator<Item = &GeneLayout> {
        Gene::ALL.into_iter().map(move |gene| self.layout(gene))
    }

    /// All exon names, gene by gene, in report order.
    pub fn exons(&self) -> Vec<String> {
        self.layouts()
            .flat_map(|layout| layout.exons.iter().cloned())
            .collect()
    }

    fn validate(&self, reference: &[&str]) -> Result<()> {
        for gene in Gene::ALL {
            let layout = self.layout(gene);
            if layout.gene != gene {
                return Err(QcError::Configuration(format!(
                    "Layout for {} is labelled {}",
                    gene, layout.gene
                )));
            }
            if layout.exons.is_empty() {
                return Err(QcError::Configuration(format!(
                    "Layout for {} has no exons",
                    gene
                )));
            }
            if let Some(exon) = layout
                .exons
                .iter()
                .find(|exon| !exon.starts_with(gene.label()))
            {
                return Err(QcError::Configuration(format!(
                    "Exon {} is not a {} exon",
                    exon, gene
                )));
            }
        }

        let (a, b) = (self.brca1.rows(), self.brca2.rows());
        if a.start < b.end && b.start < a.end {
            return Err(QcError::Configuration(format!(
                "Row ranges overlap: {} rows {:?}, {} rows {:?}",
                self.brca1.gene, a, self.brca2.gene, b
            )));
        }

        let exons = self.exons();
        if exons.len() != reference.len() {
            return Err(QcError::Configuration(format!(
                "Panel covers {} exons but the reference list has {}",
                exons.len(),
                reference.len()
            )));
        }
        if let Some(pos) = exons.iter().zip(reference).position(|(e, r)| e != r) {
            return Err(QcError::Configuration(format!(
                "Panel exon {} at position {} does not match reference exon {}",
                exons[pos], pos, reference[pos]
            )));
        }
        Ok(())
    }
}
