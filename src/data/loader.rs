// ============================================================
// Layer 4 — Text File Loader
// ============================================================
// Reads the raw .txt documents of one author:
//
//   <source root>/<author>/*.txt
//
// Files are returned in file-name order so a run over the same
// corpus always aggregates documents in the same sequence.
// Entries that do not end in `.txt`, and directories that
// happen to, are skipped.
//
// Unlike a best-effort loader, a file that cannot be read
// (permissions, invalid UTF-8) fails the whole author: a
// partially aggregated author would silently lose text.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::traits::TextSource;

/// File-name suffix of the documents an author directory holds.
pub const TEXT_EXTENSION: &str = ".txt";

/// Loads `.txt` documents from an author's directory under a
/// corpus root. Implements the TextSource trait from Layer 3.
pub struct TextFileLoader {
    /// Root directory containing one subdirectory per author
    root: PathBuf,
}

impl TextFileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextSource for TextFileLoader {
    fn documents(&self, author: &str) -> Result<Vec<Document>> {
        let dir = self.root.join(author);
        tracing::info!("Getting texts from author {}", author);

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&dir)
            .with_context(|| format!("Cannot read author directory '{}'", dir.display()))?
        {
            let path = entry?.path();
            let Some(file_name) = path.file_name() else {
                continue;
            };
            if !file_name.to_string_lossy().ends_with(TEXT_EXTENSION) || !path.is_file() {
                continue;
            }

            let Some(name) = file_name.to_str() else {
                bail!("Text file name '{}' is not valid UTF-8", path.display());
            };
            files.push((name.to_string(), path));
        }
        files.sort();

        let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
        tracing::info!("Found texts: {:?}", names);

        files
            .into_iter()
            .map(|(name, path)| {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("Cannot read '{}'", path.display()))?;
                Ok(Document::new(name, text))
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_txt_files_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Mark_Twain");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b_huck_finn.txt"), "second book").unwrap();
        fs::write(dir.join("a_tom_sawyer.txt"), "first book").unwrap();
        fs::write(dir.join("notes.md"), "ignored").unwrap();
        fs::create_dir_all(dir.join("drafts.txt")).unwrap();

        let docs = TextFileLoader::new(tmp.path()).documents("Mark_Twain").unwrap();

        assert_eq!(
            docs,
            vec![
                Document::new("a_tom_sawyer.txt", "first book"),
                Document::new("b_huck_finn.txt", "second book"),
            ]
        );
    }

    #[test]
    fn test_author_without_texts_has_no_documents() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Homer")).unwrap();

        let docs = TextFileLoader::new(tmp.path()).documents("Homer").unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_missing_author_directory_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(TextFileLoader::new(tmp.path()).documents("Nobody").is_err());
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Homer");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("iliad.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        assert!(TextFileLoader::new(tmp.path()).documents("Homer").is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_text_file_name_fails() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Homer");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("odyssey.txt"), "sing to me of the man").unwrap();
        fs::write(dir.join(OsStr::from_bytes(b"il\xffiad.txt")), "rage").unwrap();

        let err = TextFileLoader::new(tmp.path()).documents("Homer").unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
