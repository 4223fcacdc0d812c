//! Finding `.msg` files on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension of message source files.
pub const MESSAGE_EXTENSION: &str = "msg";

/// Whether a path names a message file.
pub fn is_message_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(MESSAGE_EXTENSION)
}

/// Expand a list of files and directories into message files.
///
/// Files are kept as given, whatever their extension. Directories are
/// walked recursively for `.msg` files, sorted by path. Missing paths are
/// kept so the caller reports them.
pub fn collect_message_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_message_file(e.path()))
            .map(|e| e.into_path())
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}
