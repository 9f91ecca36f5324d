pub mod classify;
pub mod config;
pub mod export;
pub mod locator;
pub mod matrix;
pub mod panel;
pub mod report;

#[cfg(test)]
pub mod fixtures;

pub use classify::{classify_gene, ExonCall, FailIndicator, DEFAULT_MIN_DEPTH};
pub use config::QcConfig;
pub use export::{write_report, Highlight};
pub use locator::{locate_samples, RunSummary, SampleSet};
pub use matrix::ExonMatrix;
pub use panel::{Gene, GeneLayout, Panel};
pub use report::{read_report, QcTable};
