use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

/// Per-request staging directory for transient artifacts.
///
/// Owns the staged upload and any derived page images. The directory is
/// uniquely named under the configured spool directory and is removed,
/// contents included, when the value drops — which happens on every exit
/// path of an extraction, including error propagation.
pub struct Staging {
    dir: TempDir,
}

impl Staging {
    pub fn create(spool_dir: &Path) -> Result<Self> {
        fs::create_dir_all(spool_dir)?;
        let dir = tempfile::Builder::new()
            .prefix("docex-")
            .tempdir_in(spool_dir)?;
        Ok(Self { dir })
    }

    /// Write the upload into the staging directory and return its path.
    ///
    /// Only the final path component of the client-supplied filename is
    /// used, so a hostile `../../name` cannot escape the directory.
    pub fn store_upload(&self, filename: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.dir.path().join(sanitize_file_name(filename));
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Path for a rasterized page image, 1-based.
    pub fn page_path(&self, page_number: usize) -> PathBuf {
        self.dir.path().join(format!("page_{page_number}.png"))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn sanitize_file_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string()
}
