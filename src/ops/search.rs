use regex::Regex;

use crate::model::corpus::Corpus;
use crate::model::split::Split;

/// A split entry that matched a search
#[derive(Debug, Clone)]
pub struct FileHit {
    pub project: String,
    pub split: Split,
    pub file: String,
}

/// Search every split entry of every project against a regex.
/// Hits come back in splits-file order, train before test per project.
pub fn search_files(corpus: &Corpus, re: &Regex) -> Vec<FileHit> {
    let mut hits = Vec::new();

    for project in &corpus.projects {
        for split in [Split::Train, Split::Test] {
            for file in project.split_files(split) {
                if re.is_match(file) {
                    hits.push(FileHit {
                        project: project.name.clone(),
                        split,
                        file: file.clone(),
                    });
                }
            }
        }
    }

    hits
}
