use std::collections::HashSet;

use serde::Serialize;

use crate::model::corpus::Corpus;

/// Structured result from `sp check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (something that should be fixed).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Two records share a project name
    #[serde(rename = "duplicate_project")]
    DuplicateProject { name: String },
    /// A file is listed in both splits of one project
    #[serde(rename = "file_in_both_splits")]
    FileInBothSplits { project: String, file: String },
}

/// A validation warning (non-critical issue).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Project has an empty switch
    #[serde(rename = "empty_switch")]
    EmptySwitch { project: String },
    /// Project declares no files in either split
    #[serde(rename = "no_files")]
    NoFiles { project: String },
}

/// Validate a corpus and return structured results.
///
/// This is a read-only operation — it does not modify the corpus.
///
/// Checks performed:
/// 1. Project names are unique
/// 2. No file appears in both splits of one project
/// 3. Warnings for empty switches and projects with no files
pub fn check_corpus(corpus: &Corpus) -> CheckResult {
    let mut result = CheckResult::default();

    let mut seen = HashSet::new();
    for project in &corpus.projects {
        if !seen.insert(project.name.as_str()) {
            result.errors.push(CheckError::DuplicateProject {
                name: project.name.clone(),
            });
        }

        let train: HashSet<&str> = project.train_files.iter().map(String::as_str).collect();
        for file in &project.test_files {
            if train.contains(file.as_str()) {
                result.errors.push(CheckError::FileInBothSplits {
                    project: project.name.clone(),
                    file: file.clone(),
                });
            }
        }

        if project.switch.is_empty() {
            result.warnings.push(CheckWarning::EmptySwitch {
                project: project.name.clone(),
            });
        }
        if project.train_files.is_empty() && project.test_files.is_empty() {
            result.warnings.push(CheckWarning::NoFiles {
                project: project.name.clone(),
            });
        }
    }

    result.valid = result.errors.is_empty();
    result
}
