use std::path::Path;

use tracing::warn;

use crate::parsing::{list_dir_sorted, resolve, Resolved, SourceIssue};

/// Text content gathered from a configured input source.
///
/// `content` is empty when nothing could be read; `issues` records why.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    pub content: String,
    pub issues: Vec<SourceIssue>,
}

impl SourceText {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Read a free-text source: a single file, or every file in a directory
/// concatenated in name order.
///
/// Never fails: missing paths and unreadable files produce an empty (or
/// partial) result with the problem recorded in
/// [`issues`](SourceText::issues) and logged.
#[must_use]
pub fn read(base: &Path, path: &Path) -> SourceText {
    let mut text = SourceText::default();

    match resolve(base, path) {
        Resolved::File(file) => read_file_into(&file, &mut text),
        Resolved::Dir(dir) => match list_dir_sorted(&dir) {
            Ok(files) => {
                for file in files {
                    read_file_into(&file, &mut text);
                }
            }
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "unable to list input directory");
                text.issues.push(SourceIssue::Unreadable {
                    path: dir,
                    detail: err.to_string(),
                });
            }
        },
        Resolved::Missing(missing) => {
            warn!(path = %missing.display(), "input text source does not exist, continuing with no content");
            text.issues.push(SourceIssue::Missing { path: missing });
        }
    }

    text
}

fn read_file_into(file: &Path, text: &mut SourceText) {
    match std::fs::read_to_string(file) {
        Ok(content) => text.content.push_str(&content),
        Err(err) => {
            warn!(path = %file.display(), error = %err, "unable to read input text file, skipping");
            text.issues.push(SourceIssue::Unreadable {
                path: file.to_path_buf(),
                detail: err.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_single_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "plate AB12 CDE").unwrap();

        let text = read(dir.path(), Path::new("notes.txt"));
        assert_eq!(text.content, "plate AB12 CDE");
        assert!(text.issues.is_empty());
    }

    #[test]
    fn test_read_directory_concatenates_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("b.txt"), "second").unwrap();
        std::fs::write(input.join("a.txt"), "first ").unwrap();

        let text = read(dir.path(), Path::new("input"));
        assert_eq!(text.content, "first second");
        assert!(text.issues.is_empty());
    }

    #[test]
    fn test_read_missing_path_soft_fails() {
        let dir = tempfile::tempdir().unwrap();

        let text = read(dir.path(), Path::new("does-not-exist"));
        assert!(text.is_empty());
        assert_eq!(text.issues.len(), 1);
        assert!(matches!(text.issues[0], SourceIssue::Missing { .. }));
    }

    #[test]
    fn test_read_non_utf8_file_soft_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("garbage.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let text = read(dir.path(), Path::new("garbage.bin"));
        assert!(text.is_empty());
        assert!(matches!(text.issues[0], SourceIssue::Unreadable { .. }));
    }
}
