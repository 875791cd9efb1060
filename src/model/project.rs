use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::split::Split;
use crate::util::filename::normalize_filename;

/// One project object as it appears in a splits file.
///
/// `project_name`, `train_files`, `test_files`, and `switch` are required;
/// a record missing any of them fails to deserialize. The build fields are
/// optional free text, empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProjectSplit {
    pub project_name: String,
    pub train_files: Vec<String>,
    pub test_files: Vec<String>,
    /// opam switch the project builds under, e.g. `coq-8.10`
    pub switch: String,
    /// e.g. `./configure.sh && make`
    #[serde(default)]
    pub build_command: String,
    /// e.g. `long`
    #[serde(default)]
    pub build_partition: String,
}

/// A project's split metadata, bound to the corpus root it lives under.
#[derive(Debug, Clone)]
pub struct ProjectSplit {
    pub name: String,
    pub train_files: Vec<String>,
    pub test_files: Vec<String>,
    pub switch: String,
    pub build_command: String,
    pub build_partition: String,
    /// Root directory all projects of the corpus live under
    pub projects_root: PathBuf,
}

impl ProjectSplit {
    /// Bind a raw splits-file record to a resolved corpus root.
    pub fn from_raw(raw: RawProjectSplit, projects_root: &Path) -> ProjectSplit {
        ProjectSplit {
            name: raw.project_name,
            train_files: raw.train_files,
            test_files: raw.test_files,
            switch: raw.switch,
            build_command: raw.build_command,
            build_partition: raw.build_partition,
            projects_root: projects_root.to_path_buf(),
        }
    }

    /// Filenames declared for the given split, in splits-file order.
    pub fn split_files(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train_files,
            Split::Test => &self.test_files,
        }
    }

    /// Whether `filename` falls in the given split.
    ///
    /// Split entries are bare filenames while callers usually hold full
    /// paths, so membership is substring containment against the normalized
    /// filename, not equality.
    pub fn contains_file(&self, filename: &str, split: Split) -> bool {
        let filename = normalize_filename(filename);
        self.split_files(split)
            .iter()
            .any(|entry| filename.contains(entry.as_str()))
    }

    /// The directory expected to hold this project's source tree.
    pub fn project_dir(&self) -> PathBuf {
        self.projects_root.join(&self.name)
    }
}
