//! Filesystem helpers — config/documents locations, the in-app file
//! browser, and the persisted recent-files list.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-app config directory, created on first use.
pub fn config_dir(app: &str) -> PathBuf {
    let dir = directories::ProjectDirs::from("", "", app)
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(app));
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// The user's documents folder, falling back to the home directory and
/// finally the current directory.
pub fn documents_dir() -> PathBuf {
    if let Some(dirs) = directories::UserDirs::new() {
        if let Some(docs) = dirs.document_dir() {
            return docs.to_path_buf();
        }
        return dirs.home_dir().to_path_buf();
    }
    PathBuf::from(".")
}

/// One row of the file browser.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

/// Directory listing state behind the open/save dialogs.
///
/// Hidden entries are skipped; directories sort before files. An optional
/// extension filter applies to files only, so directories stay navigable.
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    filter: Option<Vec<String>>,
}

impl FileBrowser {
    pub fn new(dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: dir,
            entries: Vec::new(),
            selected_index: None,
            filter: None,
        };
        browser.refresh();
        browser
    }

    /// Restrict listed files to the given extensions (lowercase, no dot).
    pub fn with_filter(mut self, extensions: Vec<String>) -> Self {
        self.filter = Some(extensions);
        self.refresh();
        self
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        let read = match std::fs::read_dir(&self.current_dir) {
            Ok(read) => read,
            Err(_) => return,
        };
        for entry in read.flatten() {
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if name.starts_with('.') {
                continue;
            }
            let is_directory = path.is_dir();
            if !is_directory {
                if let Some(filter) = &self.filter {
                    let ext = path
                        .extension()
                        .map(|e| e.to_string_lossy().to_lowercase())
                        .unwrap_or_default();
                    if !filter.iter().any(|f| f == &ext) {
                        continue;
                    }
                }
            }
            self.entries.push(FileEntry { name, path, is_directory });
        }

        self.entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
    }

    pub fn navigate_to(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.refresh();
    }

    pub fn navigate_up(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.navigate_to(parent.to_path_buf());
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// Directory a typed filename is saved into.
    pub fn save_directory(&self) -> PathBuf {
        self.current_dir.clone()
    }
}

/// Most-recently-opened files, persisted as JSON in the config directory.
#[derive(Serialize, Deserialize)]
pub struct RecentFiles {
    pub files: Vec<PathBuf>,
    max_entries: usize,
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        Self { files: Vec::new(), max_entries }
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| StorageError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&json)
            .map_err(|source| StorageError::Parse { path: path.to_path_buf(), source })
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| StorageError::Parse { path: path.to_path_buf(), source })?;
        std::fs::write(path, json)
            .map_err(|source| StorageError::Io { path: path.to_path_buf(), source })
    }

    /// Move `path` to the front, dropping duplicates and clamping to the
    /// configured length.
    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.insert(0, path);
        self.files.truncate(self.max_entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_files_dedupes_and_caps() {
        let mut recent = RecentFiles::new(3);
        recent.add(PathBuf::from("/a"));
        recent.add(PathBuf::from("/b"));
        recent.add(PathBuf::from("/a"));
        assert_eq!(recent.files, vec![PathBuf::from("/a"), PathBuf::from("/b")]);

        recent.add(PathBuf::from("/c"));
        recent.add(PathBuf::from("/d"));
        assert_eq!(
            recent.files,
            vec![PathBuf::from("/d"), PathBuf::from("/c"), PathBuf::from("/a")]
        );
    }

    #[test]
    fn recent_files_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");

        let mut recent = RecentFiles::new(5);
        recent.add(PathBuf::from("/tmp/one.txt"));
        recent.add(PathBuf::from("/tmp/two.txt"));
        recent.save(&path).expect("save");

        let loaded = RecentFiles::load(&path).expect("load");
        assert_eq!(loaded.files, recent.files);
        assert_eq!(loaded.max_entries, 5);
    }

    #[test]
    fn recent_files_load_missing_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(RecentFiles::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn browser_sorts_directories_first_and_filters_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("note.txt"), "n").expect("write");
        std::fs::write(dir.path().join("image.png"), "p").expect("write");
        std::fs::write(dir.path().join(".hidden"), "h").expect("write");

        let browser = FileBrowser::new(dir.path().to_path_buf())
            .with_filter(vec!["txt".to_string()]);
        let names: Vec<&str> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "note.txt"]);
        assert!(browser.entries[0].is_directory);
    }

    #[test]
    fn browser_navigates_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).expect("mkdir");

        let mut browser = FileBrowser::new(sub.clone());
        browser.navigate_up();
        assert_eq!(browser.current_dir, dir.path());
    }
}
