use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QcError>;

#[derive(Debug, Error)]
pub enum QcError {
    #[error("Run folder {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Unable to write output: {0}")]
    OutputWrite(String),
}

impl QcError {
    /// Process exit status reported for this class of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            QcError::InputNotFound { .. } => 1,
            QcError::Parse(_) => 2,
            QcError::OutputWrite(_) => 3,
            QcError::Configuration(_) => 4,
        }
    }
}

pub fn handle_error_and_exit(err: QcError) -> ! {
    log::error!("{}", err);
    std::process::exit(err.exit_code());
}
