use crate::model::{ImportError, OutputDocument};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes the document with 2-space indentation and replaces `path` atomically.
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<(), ImportError> {
    write_json(document, path)
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), ImportError> {
    let content = serde_json::to_string_pretty(value).map_err(ImportError::Serialize)?;

    let write_err = |source: std::io::Error| ImportError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Temp file must live next to the target so the rename stays on one filesystem
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.flush().map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
