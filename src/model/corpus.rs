use std::path::PathBuf;

use super::project::ProjectSplit;
use super::split::Split;

/// A fully loaded benchmark: every project's split plus the paths the
/// collection was generated from.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Per-project splits, in splits-file order
    pub projects: Vec<ProjectSplit>,
    /// Root directory containing every project's source tree
    pub projects_root: PathBuf,
    /// The splits file this corpus was read from
    pub splits_file: PathBuf,
    /// Home directory at load time, kept for provenance
    pub home_root: PathBuf,
}

impl Corpus {
    /// Find a project by name.
    pub fn project(&self, name: &str) -> Option<&ProjectSplit> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Whether `filename` falls in the given split of any project.
    pub fn contains_file(&self, filename: &str, split: Split) -> bool {
        self.projects.iter().any(|p| p.contains_file(filename, split))
    }
}
