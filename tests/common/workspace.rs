//! Scratch directory with input images written to disk.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tone_quant::Image;

use tonelab::rendering::write_png;

/// Temporary directory that is removed when dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `image` as PNG under `name` and return its path.
    pub fn write_image(&self, name: &str, image: impl Into<Image>) -> PathBuf {
        let path = self.dir.path().join(name);
        write_png(&image.into(), &path).expect("Failed to write fixture image");
        path
    }

    /// Write a text file (config, junk input) and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}
