#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use teapot::http::loader::DocumentRoot;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A throwaway document root with canned pages, removed on drop.
pub struct TempDocRoot {
    dir: PathBuf,
}

impl TempDocRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "teapot-test-{}-{}",
            std::process::id(),
            id
        ));
        std::fs::create_dir_all(dir.join("html")).unwrap();

        for code in [404, 405, 418, 503] {
            std::fs::write(
                dir.join("html").join(format!("{code}.html")),
                format!("<html><body>canned {code}</body></html>"),
            )
            .unwrap();
        }

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let file = self.dir.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&file, contents).unwrap();
        file
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.join(relative)).unwrap();
    }

    pub fn docs(&self) -> DocumentRoot {
        DocumentRoot::new(&self.dir, self.dir.join("html"))
    }
}

impl Drop for TempDocRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Splits a raw response into its head (before the blank line) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    (
        String::from_utf8(raw[..pos].to_vec()).unwrap(),
        raw[pos + 4..].to_vec(),
    )
}
