use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a transcription into a rope, ready for parsing.
pub fn read_transcription(path: &Path) -> Result<Rope, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(Rope::from(text.as_str()))
}

/// Write exported records, creating parent directories as needed.
pub fn write_records(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
