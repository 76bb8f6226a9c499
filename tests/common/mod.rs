#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use docserve::config::StaticFilesConfig;

static NEXT_SITE: AtomicUsize = AtomicUsize::new(0);

/// A throwaway document root and error page directory, removed on drop.
pub struct TempSite {
    root: PathBuf,
}

impl TempSite {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!(
            "docserve-test-{}-{}",
            std::process::id(),
            NEXT_SITE.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(root.join("htdocs")).unwrap();
        std::fs::create_dir_all(root.join("error")).unwrap();
        Self { root }
    }

    pub fn htdocs(&self) -> PathBuf {
        self.root.join("htdocs")
    }

    pub fn write_doc(&self, name: &str, contents: &[u8]) {
        write(&self.htdocs().join(name), contents);
    }

    pub fn write_error_page(&self, code: u16, contents: &str) {
        write(
            &self.root.join("error").join(format!("{}.html", code)),
            contents.as_bytes(),
        );
    }

    /// Creates a symlink in the document root pointing at `target`.
    #[cfg(unix)]
    pub fn symlink_doc(&self, name: &str, target: &str) {
        std::os::unix::fs::symlink(target, self.htdocs().join(name)).unwrap();
    }

    pub fn config(&self) -> StaticFilesConfig {
        StaticFilesConfig {
            document_root: self.htdocs(),
            error_pages: self.root.join("error"),
        }
    }
}

impl Drop for TempSite {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}
