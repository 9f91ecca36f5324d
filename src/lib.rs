//! # exonqc
//! Aggregates the per-sample BRCA1/BRCA2 coverage reports of a clinical pool
//! run into one spreadsheet that flags, for every exon and sample, whether the
//! minimum depth fell below the QC threshold.
//!
//! ```bash
//!  ./exonqc CP0379A -f /mnt/storage/data/NGS/CP/
//! ```

pub mod cli;
pub mod commands;
pub mod qc;
pub mod utils;
