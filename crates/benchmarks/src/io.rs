//! I/O operations for benchmark results.
//!
//! This module reads benchmark result documents from the filesystem and
//! combines the documents of one upload into a single [`BenchmarkResults`].

use crate::error::{BenchmarkError, Result};
use crate::result::BenchmarkResults;
use std::fs;
use std::path::Path;

/// Read one results document from a JSON file.
pub fn read_results_json(path: impl AsRef<Path>) -> Result<BenchmarkResults> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BenchmarkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| BenchmarkError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every file and merge them, in order, into one document.
pub fn read_and_merge<P: AsRef<Path>>(paths: &[P]) -> Result<BenchmarkResults> {
    let documents = paths
        .iter()
        .map(read_results_json)
        .collect::<Result<Vec<_>>>()?;
    BenchmarkResults::merge_all(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::tests::info;
    use crate::info::BenchmarkRunner;
    use crate::result::{AggregateKind, BenchmarkCase, BenchmarkRunResult};

    fn document(model: &str) -> BenchmarkResults {
        let mut results = BenchmarkResults::new("HEAD");
        results.benchmarks.push(BenchmarkCase::new(
            info(model, BenchmarkRunner::Vmvx),
            vec![BenchmarkRunResult::aggregate(AggregateKind::Mean, 4.2)],
        ));
        results
    }

    fn write_results_json(results: &BenchmarkResults, path: &Path) {
        fs::write(path, serde_json::to_string_pretty(results).unwrap()).unwrap();
    }

    #[test]
    fn test_write_then_read_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        write_results_json(&document("PoseNet"), &first);
        write_results_json(&document("MobileSSD"), &second);

        let merged = read_and_merge(&[first, second]).unwrap();
        assert_eq!(merged.commit, "HEAD");
        assert_eq!(merged.benchmarks.len(), 2);
        assert_eq!(merged.benchmarks[1].benchmark_info.model_name, "MobileSSD");
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"commit\": 1}").unwrap();

        let err = read_results_json(&path).unwrap_err();
        assert!(matches!(err, BenchmarkError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_results_json("/nonexistent/results.json").unwrap_err();
        assert!(matches!(err, BenchmarkError::Read { .. }));
    }
}
