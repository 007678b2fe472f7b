//! Test utilities for record loading
//!
//! Provides CSV fixtures written into temporary directories.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Standard dataset used across loader tests
pub const DINOSAURS_CSV: &str = "name,species,length
Rex,T-Rex,12m
Spike,Stegosaurus,9m
Spike2,Stegosaurus,11m
Leota,,4m
Toole,Raptor,
";

/// Write `content` to `file_name` inside a fresh temporary directory
///
/// The directory is returned alongside the path so it outlives the test body.
pub fn write_csv(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
