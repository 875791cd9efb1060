use serde::Serialize;

use crate::model::corpus::Corpus;
use crate::model::project::ProjectSplit;

/// File counts for one project's split
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SplitStats {
    pub train: usize,
    pub test: usize,
}

impl SplitStats {
    pub fn total(&self) -> usize {
        self.train + self.test
    }
}

/// Count a single project's split files.
pub fn project_stats(project: &ProjectSplit) -> SplitStats {
    SplitStats {
        train: project.train_files.len(),
        test: project.test_files.len(),
    }
}

/// Sum counts over a selection of projects.
pub fn selection_stats(projects: &[&ProjectSplit]) -> SplitStats {
    let mut totals = SplitStats::default();
    for project in projects {
        let s = project_stats(project);
        totals.train += s.train;
        totals.test += s.test;
    }
    totals
}

/// Aggregate counts across a corpus.
pub fn corpus_stats(corpus: &Corpus) -> SplitStats {
    selection_stats(&corpus.projects.iter().collect::<Vec<_>>())
}
