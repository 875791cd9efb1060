use serde::Serialize;

use crate::model::corpus::Corpus;
use crate::model::project::ProjectSplit;
use crate::model::split::Split;
use crate::ops::search::FileHit;
use crate::ops::stats::{SplitStats, project_stats, selection_stats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectSummaryJson {
    pub name: String,
    pub switch: String,
    pub train_files: usize,
    pub test_files: usize,
}

#[derive(Serialize)]
pub struct ProjectListJson {
    pub projects: Vec<ProjectSummaryJson>,
    pub totals: SplitStats,
}

#[derive(Serialize)]
pub struct ProjectJson {
    pub name: String,
    pub switch: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub build_command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub build_partition: String,
    pub project_dir: String,
    pub train_files: Vec<String>,
    pub test_files: Vec<String>,
}

#[derive(Serialize)]
pub struct WhichHitJson {
    pub project: String,
    pub split: Split,
}

#[derive(Serialize)]
pub struct FileHitJson {
    pub project: String,
    pub split: Split,
    pub file: String,
}

#[derive(Serialize)]
pub struct BenchJson {
    pub benchmark: String,
    pub splits_file: String,
    pub projects_root: String,
    pub projects: Vec<ProjectSummaryJson>,
    pub totals: SplitStats,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn project_summary_to_json(project: &ProjectSplit) -> ProjectSummaryJson {
    let stats = project_stats(project);
    ProjectSummaryJson {
        name: project.name.clone(),
        switch: project.switch.clone(),
        train_files: stats.train,
        test_files: stats.test,
    }
}

pub fn project_to_json(project: &ProjectSplit) -> ProjectJson {
    ProjectJson {
        name: project.name.clone(),
        switch: project.switch.clone(),
        build_command: project.build_command.clone(),
        build_partition: project.build_partition.clone(),
        project_dir: project.project_dir().display().to_string(),
        train_files: project.train_files.clone(),
        test_files: project.test_files.clone(),
    }
}

pub fn file_hit_to_json(hit: &FileHit) -> FileHitJson {
    FileHitJson {
        project: hit.project.clone(),
        split: hit.split,
        file: hit.file.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format one project as a listing line
pub fn format_project_line(project: &ProjectSplit) -> String {
    let stats = project_stats(project);
    format!(
        "  {} [{}]  {} train / {} test",
        project.name, project.switch, stats.train, stats.test
    )
}

/// Format the project listing with an aggregate footer
pub fn format_project_listing(corpus: &Corpus, projects: &[&ProjectSplit]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("== {} ==", corpus.splits_file.display()));
    for project in projects {
        lines.push(format_project_line(project));
    }
    let totals = selection_stats(projects);
    lines.push(String::new());
    lines.push(format!(
        "{} project(s), {} train / {} test file(s)",
        projects.len(),
        totals.train,
        totals.test
    ));
    lines
}

/// Format detailed project view
pub fn format_project_detail(project: &ProjectSplit) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{} [{}]", project.name, project.switch));
    lines.push(format!("dir: {}", project.project_dir().display()));
    if !project.build_command.is_empty() {
        lines.push(format!("build: {}", project.build_command));
    }
    if !project.build_partition.is_empty() {
        lines.push(format!("partition: {}", project.build_partition));
    }
    for split in [Split::Train, Split::Test] {
        let files = project.split_files(split);
        lines.push(String::new());
        lines.push(format!("{} ({}):", split, files.len()));
        for file in files {
            lines.push(format!("  {}", file));
        }
    }
    lines
}

/// Format a search hit line
pub fn format_file_hit(hit: &FileHit) -> String {
    format!("{}/{}: {}", hit.project, hit.split, hit.file)
}
