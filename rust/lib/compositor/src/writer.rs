//! Writer: places the serialized document at
//! `<root>/assets/minecraft/<kind>s/<material>.json`.

use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::CompositorError;
use crate::model::SelectorDocument;

/// Output location for a carrier. The kind is pluralized by suffix.
pub fn output_path(root: &Path, carrier_kind: &str, carrier_material: &str) -> PathBuf {
    root.join("assets")
        .join("minecraft")
        .join(format!("{}s", carrier_kind))
        .join(format!("{}.json", carrier_material))
}

pub fn encode(doc: &SelectorDocument, pretty: bool) -> Result<Vec<u8>, CompositorError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    Ok(bytes)
}

/// Serialize `doc` and replace whatever is at the carrier's output path.
///
/// The bytes go to a temporary file beside the target which is then renamed
/// over it, so the destination is either the complete new document or left
/// untouched.
pub fn write_document(
    doc: &SelectorDocument,
    root: &Path,
    carrier_kind: &str,
    carrier_material: &str,
    pretty: bool,
) -> Result<PathBuf, CompositorError> {
    let path = output_path(root, carrier_kind, carrier_material);
    let dir = path
        .parent()
        .ok_or_else(|| CompositorError::Config(format!("no parent directory for {:?}", path)))?;
    fs::create_dir_all(dir).map_err(|e| CompositorError::io(dir, e))?;

    let bytes = encode(doc, pretty)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CompositorError::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| CompositorError::io(tmp.path(), e))?;

    // Temp files are created owner-only; give the document the mode of the
    // file it replaces, or a world-readable one.
    let permissions = match fs::metadata(&path) {
        Ok(meta) => meta.permissions(),
        Err(_) => new_file_permissions(tmp.path()).map_err(|e| CompositorError::io(tmp.path(), e))?,
    };
    fs::set_permissions(tmp.path(), permissions).map_err(|e| CompositorError::io(tmp.path(), e))?;
    tmp.persist(&path)
        .map_err(|e| CompositorError::io(&path, e.error))?;

    debug!("Writer: wrote {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}

#[cfg(unix)]
fn new_file_permissions(_tmp: &Path) -> io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions(tmp: &Path) -> io::Result<Permissions> {
    fs::metadata(tmp).map(|meta| meta.permissions())
}
