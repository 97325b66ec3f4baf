use {
    crate::corpus::extension::ExtensionError,
    std::path::{Path, PathBuf},
    thiserror::Error,
    walkdir::WalkDir,
};

pub mod extension;
pub mod matching;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("could not list fixture directory `{path}`")]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("fixture name is not valid UTF-8: `{path}`")]
    NonUtf8Name { path: PathBuf },

    #[error("fixture directory `{path}` is malformed")]
    Ambiguous {
        path: PathBuf,
        #[source]
        source: ExtensionError,
    },
}

/// Lists the file names directly inside `dir`, sorted by file name.
///
/// Subdirectories are ignored; every plain directory entry is a candidate
/// fixture.
pub fn list_directory(dir: impl AsRef<Path>) -> Result<Vec<String>, CorpusError> {
    let dir = dir.as_ref();
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| CorpusError::Listing {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_file() {
            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| CorpusError::NonUtf8Name {
                    path: entry.path().to_path_buf(),
                })?;
            names.push(name.to_string());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use {super::list_directory, std::fs, tempfile::TempDir};

    #[test]
    fn list_files_sorted_without_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        assert_eq!(
            list_directory(dir.path()).unwrap(),
            vec!["a.txt".to_string(), "b.txt".to_string()]
        )
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(list_directory(dir.path().join("absent")).is_err())
    }
}
