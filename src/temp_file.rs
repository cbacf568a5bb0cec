use std::{io, path::Path};

use tempfile::{Builder, TempPath};

const PREFIX: &str = "video-";
const SUFFIX: &str = ".mp4";

/// A downloaded file that is removed from disk when dropped.
pub struct TempFile {
    path: Option<TempPath>,
}

impl TempFile {
    /// Create an empty `video-*.mp4` file in `dir`, returning it opened for writing.
    pub fn create_in(dir: &Path) -> io::Result<(tokio::fs::File, Self)> {
        let (file, path) = Builder::new()
            .prefix(PREFIX)
            .suffix(SUFFIX)
            .tempfile_in(dir)?
            .into_parts();
        Ok((tokio::fs::File::from_std(file), Self { path: Some(path) }))
    }

    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or(Path::new(""))
    }
}

impl std::fmt::Debug for TempFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TempFile").field(&self.path()).finish()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };
        let display = path.display().to_string();
        match path.close() {
            Ok(()) => log::debug!("Removed temp file {}", display),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove temp file {}: {}", display, e),
        }
    }
}
