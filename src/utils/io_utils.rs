use crate::utils::{QcError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = "brcaQC.xlsx";

pub fn output_path(output_dir: &Path, run: &str) -> PathBuf {
    output_dir.join(format!("{}_{}", run, OUTPUT_SUFFIX))
}

/// Writes `path` through a temporary sibling file that is renamed into place
/// only once `f` succeeds. On failure the temporary file is removed and any
/// existing file at `path` is left untouched.
pub fn create_writer<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".exonqc-").suffix(".tmp");
    // Same mode as File::create: 0666 less umask.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| QcError::OutputWrite(format!("{}: {}", dir.display(), e)))?;

    f(tmp.as_file_mut())?;

    tmp.as_file()
        .sync_all()
        .map_err(|e| QcError::OutputWrite(format!("{}: {}", path.display(), e)))?;
    tmp.persist(path)
        .map_err(|e| QcError::OutputWrite(format!("{}: {}", path.display(), e.error)))?;
    Ok(())
}
