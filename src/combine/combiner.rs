//! Sequential file combiner module
//!
//! Reads the resolved files strictly in order and concatenates their raw
//! bytes into one buffer. The first read failure wins: remaining files are
//! never opened and no partial output escapes.

use super::CombineError;
use std::path::PathBuf;
use tokio::fs;

/// Concatenate the contents of `paths` in order.
///
/// File *i+1* is not read until file *i* has been read in full, so the
/// output byte order always matches the input path order. Reads go through
/// `tokio::fs`, so the calling task yields at each file without blocking
/// other requests.
pub async fn combine_files(paths: &[PathBuf]) -> Result<Vec<u8>, CombineError> {
    let mut output = Vec::new();
    for path in paths {
        let data = fs::read(path).await.map_err(|source| CombineError::FileRead {
            path: path.clone(),
            source,
        })?;
        output.extend_from_slice(&data);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            paths.push(path);
        }
        (dir, paths)
    }

    #[tokio::test]
    async fn test_concatenates_in_order() {
        let (_dir, paths) = fixture(&[("a.css", "A"), ("b.css", "B"), ("c.css", "C")]);
        let combined = combine_files(&paths).await.unwrap();
        assert_eq!(combined, b"ABC");
    }

    #[tokio::test]
    async fn test_no_separators_inserted() {
        let (_dir, paths) = fixture(&[("a.js", "var a=1;"), ("b.js", "var b=2;")]);
        let combined = combine_files(&paths).await.unwrap();
        assert_eq!(combined, b"var a=1;var b=2;");
    }

    #[tokio::test]
    async fn test_single_file() {
        let (_dir, paths) = fixture(&[("app.js", "console.log(1)")]);
        let combined = combine_files(&paths).await.unwrap();
        assert_eq!(combined, b"console.log(1)");
    }

    #[tokio::test]
    async fn test_empty_files_yield_empty_payload() {
        let (_dir, paths) = fixture(&[("a.css", ""), ("b.css", "")]);
        let combined = combine_files(&paths).await.unwrap();
        assert!(combined.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_short_circuits() {
        let (dir, mut paths) = fixture(&[("b.css", "B")]);
        paths.insert(0, dir.path().join("missing.css"));

        let err = combine_files(&paths).await.unwrap_err();
        match err {
            CombineError::FileRead { path, .. } => {
                assert!(path.ends_with("missing.css"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_identifies_failing_file() {
        let (dir, mut paths) = fixture(&[("a.css", "A")]);
        paths.push(dir.path().join("gone.css"));

        let err = combine_files(&paths).await.unwrap_err();
        assert!(err.to_string().contains("gone.css"));
        assert!(!err.is_client_error());
    }
}
