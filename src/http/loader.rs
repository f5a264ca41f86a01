//! Filesystem access for served documents and canned pages.

use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;

use crate::config::StaticFilesConfig;
use crate::http::response::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file vanished or could not be read after it was resolved.
    #[error("resource {} is unreadable: {source}", .path.display())]
    ResourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The directory tree requests are served from.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    canned_dir: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>, canned_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            canned_dir: canned_dir.into(),
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(cfg.root.clone(), cfg.canned_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request path onto a regular file under the root.
    ///
    /// Returns `None` for anything that is not an existing regular file,
    /// including directories and paths that would leave the root.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }

        let file = self.root.join(relative);
        match std::fs::metadata(&file) {
            Ok(meta) if meta.is_file() => Some(file),
            _ => None,
        }
    }

    /// Reads the whole file.
    pub async fn load(&self, file: &Path) -> Result<Bytes, LoadError> {
        tokio::fs::read(file)
            .await
            .map(Bytes::from)
            .map_err(|source| LoadError::ResourceUnreadable {
                path: file.to_path_buf(),
                source,
            })
    }

    /// Path of the canned page for `status`.
    pub fn canned_page(&self, status: StatusCode) -> PathBuf {
        self.canned_dir.join(format!("{}.html", status.as_u16()))
    }

    pub async fn load_canned(&self, status: StatusCode) -> Result<Bytes, LoadError> {
        self.load(&self.canned_page(status)).await
    }

    /// Canned pages the classifier can ask for that are not on disk.
    pub fn missing_canned_pages(&self) -> Vec<PathBuf> {
        StatusCode::CANNED
            .iter()
            .map(|status| self.canned_page(*status))
            .filter(|page| !page.is_file())
            .collect()
    }
}
