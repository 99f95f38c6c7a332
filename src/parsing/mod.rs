//! Readers for the two fixture inputs: free-text sources and
//! expected-results datasets.
//!
//! Both readers accept a path that resolves, relative to a base directory or
//! absolutely, to either a single file or a directory of files. A directory
//! is read as the concatenation of its files in name order.
//!
//! Neither reader ever fails the run: a missing path, an unreadable file, or
//! a malformed dataset degrades to empty content plus a [`SourceIssue`]
//! carried alongside the result (and a `tracing` diagnostic). A misconfigured
//! fixture should cost one vehicle's worth of coverage, not the whole test
//! session.

use std::path::{Path, PathBuf};

pub mod expected;
pub mod source;

/// A non-fatal problem encountered while reading an input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceIssue {
    #[error("path does not exist as file or directory: '{}'", .path.display())]
    Missing { path: PathBuf },

    #[error("unable to read '{}': {detail}", .path.display())]
    Unreadable { path: PathBuf, detail: String },

    #[error("malformed expected-results file '{}': {detail}", .path.display())]
    Malformed { path: PathBuf, detail: String },
}

/// What a configured input path points at.
pub(crate) enum Resolved {
    File(PathBuf),
    Dir(PathBuf),
    Missing(PathBuf),
}

pub(crate) fn resolve(base: &Path, path: &Path) -> Resolved {
    // `join` returns `path` unchanged when it is absolute, so absolute
    // inputs bypass the base directory naturally.
    let joined = base.join(path);
    if joined.is_file() {
        Resolved::File(joined)
    } else if joined.is_dir() {
        Resolved::Dir(joined)
    } else {
        Resolved::Missing(joined)
    }
}

/// List the files directly inside `dir`, sorted by name.
///
/// Sorting pins down the concatenation order; directory enumeration order is
/// filesystem-dependent and would make extraction results unstable across
/// machines.
pub(crate) fn list_dir_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}
