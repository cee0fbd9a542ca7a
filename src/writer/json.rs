use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::document::CardDocument;
use crate::error::ImportError;

/// Render the document as pretty-printed JSON with a single trailing newline
pub fn render_document(doc: &CardDocument) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    Ok(text)
}

/// Write the document to `path`, replacing any previous file in one step.
///
/// The body goes to a temp file next to the target and is renamed over it,
/// so readers see either the old document or the complete new one.
pub fn write_document(doc: &CardDocument, path: &Path) -> Result<(), ImportError> {
    let text = render_document(doc)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ImportError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ImportError::io(dir, e))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| ImportError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| ImportError::io(path, e.error))?;

    Ok(())
}
