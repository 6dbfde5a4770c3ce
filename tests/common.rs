//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary working directories holding
//! markdown fixtures.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// README used across workflow tests.
pub const SAMPLE_README: &str = r#"# Sample Project

A short description with a [link](https://example.com) and `inline code`.

## Install

```bash
cargo install sample
```

## Usage

| flag | meaning |
|------|---------|
| -v   | verbose |

- [x] parse
- [ ] serve

## Install
"#;

/// Creates temporary directory containing `README.md` with `content`.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_readme_dir(content: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "README.md", content)?;
    Ok(dir)
}

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
