use crate::cli::ExonQcArgs;
use crate::qc::Highlight;
use crate::utils::output_path;
use std::path::PathBuf;

pub const DEFAULT_RUNFOLDER_PATH: &str = "/mnt/storage/data/NGS/CP/";

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct QcConfig {
    pub run: String,
    pub runfolder_path: PathBuf,
    pub output_dir: PathBuf,
    pub min_depth: i64,
    pub highlight: Highlight,
}

impl QcConfig {
    #[cfg(test)]
    pub fn new(run: impl Into<String>, runfolder_path: impl Into<PathBuf>) -> Self {
        Self {
            run: run.into(),
            runfolder_path: runfolder_path.into(),
            output_dir: PathBuf::from("."),
            min_depth: crate::qc::DEFAULT_MIN_DEPTH,
            highlight: Highlight::Background,
        }
    }

    pub fn from_args(args: &ExonQcArgs) -> Self {
        Self {
            run: args.run.clone(),
            runfolder_path: args.runfolder_path.clone(),
            output_dir: args.output_dir.clone(),
            min_depth: args.min_depth,
            highlight: args.highlight,
        }
    }

    pub fn run_dir(&self) -> PathBuf {
        self.runfolder_path.join(&self.run)
    }

    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_dir, &self.run)
    }
}
