//! File system repository

use crate::error::{KeeporgError, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One discovered note file within the export tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub path: PathBuf,
}

/// File system access for one conversion run: reads the export tree,
/// writes the output directory.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository over the given directories
    pub fn new(input_root: PathBuf, output_root: PathBuf) -> Self {
        FileSystemRepository {
            input_root,
            output_root,
        }
    }

    /// Open the repository, verifying the input directory exists.
    pub fn open(input_root: PathBuf, output_root: PathBuf) -> Result<Self> {
        if !input_root.is_dir() {
            return Err(KeeporgError::InputDirNotFound(input_root));
        }
        Ok(Self::new(input_root, output_root))
    }

    /// Recursively list the .html note files under the input root.
    ///
    /// Entries come back sorted by file name so the scan order, and with
    /// it the tie-breaking of equal timestamps, is deterministic.
    pub fn list_note_files(&self) -> Result<Vec<NoteFile>> {
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.input_root).sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| KeeporgError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_note = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(".html"));
            if is_note {
                notes.push(NoteFile {
                    path: entry.into_path(),
                });
            }
        }

        Ok(notes)
    }

    /// Read one note file whole.
    pub fn read_note_file(&self, note: &NoteFile) -> Result<String> {
        fs::read_to_string(&note.path).map_err(KeeporgError::Io)
    }

    /// Write one group file into the output directory, creating the
    /// directory first if needed. Returns the path written.
    pub fn write_group_file(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_root)?;

        let path = self.output_root.join(file_name);
        fs::write(&path, content).map_err(KeeporgError::Io)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_rejects_missing_input_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");
        let result = FileSystemRepository::open(missing.clone(), temp.path().join("out"));
        assert!(matches!(
            result,
            Err(KeeporgError::InputDirNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_list_note_files_recurses_and_filters() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("a.html"), "x").unwrap();
        fs::write(temp.path().join("nested/b.html"), "x").unwrap();
        fs::write(temp.path().join("skip.txt"), "x").unwrap();
        fs::write(temp.path().join("skip.json"), "x").unwrap();

        let repo =
            FileSystemRepository::new(temp.path().to_path_buf(), temp.path().join("out"));
        let notes = repo.list_note_files().unwrap();

        let names: Vec<String> = notes
            .iter()
            .map(|n| {
                n.path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_list_note_files_is_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.html"), "x").unwrap();
        fs::write(temp.path().join("a.html"), "x").unwrap();
        fs::write(temp.path().join("c.html"), "x").unwrap();

        let repo =
            FileSystemRepository::new(temp.path().to_path_buf(), temp.path().join("out"));
        let notes = repo.list_note_files().unwrap();

        let names: Vec<&str> = notes
            .iter()
            .map(|n| n.path.file_name().and_then(|f| f.to_str()).unwrap())
            .collect();
        assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
    }

    #[test]
    fn test_write_group_file_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(
            temp.path().to_path_buf(),
            temp.path().join("out/nested"),
        );

        let path = repo.write_group_file("work.org", "* A\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "* A\n");
    }

    #[test]
    fn test_read_note_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "<div>hi</div>").unwrap();

        let repo =
            FileSystemRepository::new(temp.path().to_path_buf(), temp.path().join("out"));
        let notes = repo.list_note_files().unwrap();
        assert_eq!(repo.read_note_file(&notes[0]).unwrap(), "<div>hi</div>");
    }
}
