use std::fs;
use std::path::{Path, PathBuf};

use crate::io::config_io::RootsConfig;
use crate::model::benchmark::Benchmark;
use crate::model::corpus::Corpus;
use crate::model::project::{ProjectSplit, RawProjectSplit};
use crate::util::filename::{expand_home, home_dir};

/// Error type for splits loading
#[derive(Debug, thiserror::Error)]
pub enum SplitsError {
    #[error("unknown benchmark, got: {0}")]
    UnknownBenchmark(String),
    #[error("benchmark {0} has no splits data (configure paths in benchmarks.toml)")]
    Unsupported(Benchmark),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} declares {found} project(s), expected {expected}")]
    ProjectCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Read a splits file into raw records, without binding them to a root.
pub fn read_raw_splits(path: &Path) -> Result<Vec<RawProjectSplit>, SplitsError> {
    let text = fs::read_to_string(path).map_err(|e| SplitsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| SplitsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a corpus from a splits file and the projects root its entries live
/// under. The root may be home-relative (`~/...`); records come out in
/// splits-file order.
pub fn load_corpus(splits_file: &Path, projects_root: &Path) -> Result<Corpus, SplitsError> {
    let splits_file = expand_home(splits_file);
    let projects_root = expand_home(projects_root);
    let raw = read_raw_splits(&splits_file)?;
    let projects: Vec<ProjectSplit> = raw
        .into_iter()
        .map(|r| ProjectSplit::from_raw(r, &projects_root))
        .collect();
    Ok(Corpus {
        projects,
        projects_root,
        splits_file,
        home_root: home_dir(),
    })
}

/// Load a known benchmark's corpus.
///
/// Paths come from `benchmarks.toml` overrides when present, else from the
/// benchmark's built-in defaults. A benchmark with neither is an explicit
/// [`SplitsError::Unsupported`] — never an empty corpus.
pub fn load_benchmark(bench: Benchmark, config: &RootsConfig) -> Result<Corpus, SplitsError> {
    let (projects_root, splits_file) = config
        .paths_for(bench)
        .ok_or(SplitsError::Unsupported(bench))?;
    let corpus = load_corpus(&splits_file, &projects_root)?;
    if let Some(expected) = bench.expected_projects() {
        let found = corpus.projects.len();
        if found != expected {
            return Err(SplitsError::ProjectCount {
                path: corpus.splits_file,
                expected,
                found,
            });
        }
    }
    Ok(corpus)
}

/// Resolve a dataset path to a benchmark and load its corpus.
pub fn load_for_path(dataset_path: &str, config: &RootsConfig) -> Result<Corpus, SplitsError> {
    let bench = Benchmark::from_path(dataset_path)
        .ok_or_else(|| SplitsError::UnknownBenchmark(dataset_path.to_string()))?;
    load_benchmark(bench, config)
}
