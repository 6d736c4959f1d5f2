//! Builds `index.json` from a directory of digest files.

use std::fs;
use std::path::Path;

use digestdesk_core::error::Result;
use digestdesk_core::paper::DigestSummary;

use crate::file_digest_source::INDEX_FILENAME;

/// Scans `dir` for digest documents, newest file name first.
///
/// The index entry uses the document's `date` (falling back to the file
/// stem) and the number of papers. Unparsable files are skipped with a
/// warning. A missing directory yields an empty index.
pub fn build_digest_index(dir: &Path) -> Result<Vec<DigestSummary>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "json")
                && path.file_name().is_some_and(|name| name != INDEX_FILENAME)
        })
        .collect();
    files.sort();
    files.reverse();

    let mut index = Vec::with_capacity(files.len());
    for path in files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                serde_json::from_str::<serde_json::Value>(&text).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(value) => {
                let date = value
                    .get("date")
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
                    .unwrap_or(stem);
                let paper_count = value
                    .get("papers")
                    .and_then(|p| p.as_array())
                    .map_or(0, Vec::len);
                index.push(DigestSummary { date, paper_count });
            }
            Err(e) => {
                tracing::warn!("[DigestIndex] Failed to parse {:?}: {}", path, e);
            }
        }
    }

    Ok(index)
}

/// Builds the index and writes it to `<dir>/index.json`.
pub fn write_digest_index(dir: &Path) -> Result<Vec<DigestSummary>> {
    let index = build_digest_index(dir)?;
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(&index)?;
    fs::write(dir.join(INDEX_FILENAME), json)?;
    tracing::info!("[DigestIndex] {} digests indexed in {:?}", index.len(), dir);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_index_is_newest_first_and_skips_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(
            dir.join("2024-01-01.json"),
            r#"{"date": "2024-01-01", "papers": [{}, {}, {}]}"#,
        )
        .unwrap();
        fs::write(dir.join("2024-01-03.json"), r#"{"papers": []}"#).unwrap();
        fs::write(dir.join("2024-01-02.json"), "broken").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let index = write_digest_index(dir).unwrap();
        assert_eq!(
            index,
            vec![
                DigestSummary {
                    date: "2024-01-03".to_string(),
                    paper_count: 0
                },
                DigestSummary {
                    date: "2024-01-01".to_string(),
                    paper_count: 3
                },
            ]
        );

        // Rebuilding must not pick up the index itself.
        let again = build_digest_index(dir).unwrap();
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let index = build_digest_index(&temp_dir.path().join("nope")).unwrap();
        assert!(index.is_empty());
    }
}
