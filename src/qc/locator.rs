use crate::utils::{QcError, Result};
use std::{fs, path::Path};

pub const REPORT_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];
pub const SAMPLE_PREFIX: &str = "C01";
pub const SAMPLE_SUFFIXES: [&str; 2] = ["b", "bW"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub qualifying: usize,
    pub other: usize,
}

/// Report files found in a run folder, in sorted filename order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub reports: Vec<String>,
    pub samples: Vec<String>,
}

impl SampleSet {
    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reports: Vec<String> = filenames
            .into_iter()
            .map(Into::into)
            .filter(|name| is_report(name))
            .collect();
        reports.sort();
        let samples = reports
            .iter()
            .filter(|name| is_qualifying_sample(name))
            .cloned()
            .collect();
        Self { reports, samples }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            qualifying: self.samples.len(),
            other: self.reports.len() - self.samples.len(),
        }
    }
}

fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.')
}

pub fn is_report(name: &str) -> bool {
    split_extension(name).is_some_and(|(_, ext)| REPORT_EXTENSIONS.contains(&ext))
}

pub fn is_qualifying_sample(name: &str) -> bool {
    match split_extension(name) {
        Some((stem, ext)) if REPORT_EXTENSIONS.contains(&ext) => {
            stem.starts_with(SAMPLE_PREFIX)
                && SAMPLE_SUFFIXES.iter().any(|suffix| stem.ends_with(suffix))
        }
        _ => false,
    }
}

pub fn locate_samples(dir: &Path) -> Result<SampleSet> {
    let input_err = |source| QcError::InputNotFound {
        path: dir.to_path_buf(),
        source,
    };
    let mut filenames = Vec::new();
    for entry in fs::read_dir(dir).map_err(input_err)? {
        let entry = entry.map_err(input_err)?;
        if entry.file_type().map_err(input_err)?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            Err(name) => log::warn!("Skipping non UTF-8 filename {:?}", name),
        }
    }
    let set = SampleSet::from_filenames(filenames);
    log::info!(
        "{}: {} report(s), {} qualifying sample(s)",
        dir.display(),
        set.reports.len(),
        set.samples.len()
    );
    Ok(set)
}
