use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::benchmark::Benchmark;
use crate::util::filename::{expand_home, home_dir};

/// Per-benchmark path overrides from `benchmarks.toml`:
///
/// ```toml
/// [benchmarks.compcert]
/// projects_root = "/data/coq-projects"
/// splits_file = "/data/compcert_projs_splits.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootsConfig {
    #[serde(default)]
    pub benchmarks: HashMap<String, BenchmarkPaths>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkPaths {
    #[serde(default)]
    pub projects_root: Option<PathBuf>,
    #[serde(default)]
    pub splits_file: Option<PathBuf>,
}

impl RootsConfig {
    /// Resolve `(projects_root, splits_file)` for a benchmark: configured
    /// overrides win, then built-in defaults, field by field. `None` when
    /// neither source provides both paths.
    pub fn paths_for(&self, bench: Benchmark) -> Option<(PathBuf, PathBuf)> {
        let over = self.benchmarks.get(bench.name());
        let defaults = bench.default_paths();
        let root = over
            .and_then(|o| o.projects_root.clone())
            .or_else(|| defaults.map(|(r, _)| PathBuf::from(r)))?;
        let splits = over
            .and_then(|o| o.splits_file.clone())
            .or_else(|| defaults.map(|(_, s)| PathBuf::from(s)))?;
        Some((expand_home(&root), expand_home(&splits)))
    }
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    config_dir.join("splits").join("benchmarks.toml")
}

/// Read a config file. A missing file yields the defaults; a corrupted one
/// warns on stderr and yields the defaults.
pub fn read_config_from(path: &Path) -> RootsConfig {
    if !path.exists() {
        return RootsConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<RootsConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: could not parse {}: {}", path.display(), e);
                RootsConfig::default()
            }
        },
        Err(_) => RootsConfig::default(),
    }
}

/// Read the config from the default location.
pub fn read_config() -> RootsConfig {
    read_config_from(&config_path())
}
