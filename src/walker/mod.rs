//! Document discovery and loading.
//!
//! The engine only ever sees already-loaded text; this module owns the
//! filesystem side: finding task folders under the tasks directory,
//! reading every file inside them, and collecting read failures so they
//! can be reported separately from security findings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::engine::Document;

/// Marker file that identifies a directory as a task folder.
pub const TASK_MARKER: &str = "task.md";

/// A file that could not be loaded. Never conflated with a finding.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The loaded input set for one scan.
#[derive(Debug, Default)]
pub struct DocumentSet {
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every task folder under `root/<tasks_dir>`.
///
/// Task folders are direct, non-hidden children of the tasks directory
/// that contain a `task.md` marker. Folders are visited in name order so
/// scans are deterministic. A missing tasks directory yields an empty
/// set, not an error.
pub fn collect_all(root: &Path, tasks_dir: &str) -> DocumentSet {
    let tasks_path = root.join(tasks_dir);
    let mut set = DocumentSet::default();

    if !tasks_path.is_dir() {
        warn!(path = %tasks_path.display(), "no tasks directory found");
        return set;
    }

    for entry in WalkDir::new(&tasks_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let name = entry.file_name().to_string_lossy();
        if !entry.file_type().is_dir() || name.starts_with('.') {
            continue;
        }
        if !entry.path().join(TASK_MARKER).is_file() {
            debug!(folder = %name, "skipping folder without task marker");
            continue;
        }
        load_folder(root, entry.path(), &mut set);
    }

    set
}

/// Load an explicit list of task folders, in caller order (targeted
/// scans over e.g. the folders touched by a change).
pub fn collect_folders(root: &Path, tasks_dir: &str, folders: &[String]) -> DocumentSet {
    let tasks_path = root.join(tasks_dir);
    let mut set = DocumentSet::default();

    for folder in folders {
        let folder_path = tasks_path.join(folder);
        if !folder_path.is_dir() {
            warn!(folder = %folder, "task folder not found");
            continue;
        }
        load_folder(root, &folder_path, &mut set);
    }

    set
}

/// Load every regular file directly inside one task folder. Unreadable
/// files (including non-UTF-8 content) are recorded as skipped.
fn load_folder(root: &Path, folder: &Path, set: &mut DocumentSet) {
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                set.skipped.push(SkippedFile {
                    path: e.path().map(Path::to_path_buf).unwrap_or_default(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(content) => {
                let identity = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or(entry.path())
                    .to_string_lossy()
                    .into_owned();
                set.documents.push(Document::new(identity, content));
            }
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping unreadable file");
                set.skipped.push(SkippedFile {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}
