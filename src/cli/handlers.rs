use std::path::{Path, PathBuf};

use regex::Regex;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::splits_io::{self, SplitsError};
use crate::model::corpus::Corpus;
use crate::model::split::Split;
use crate::ops::stats::{corpus_stats, selection_stats};
use crate::ops::{check, search};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        Commands::Projects(args) => cmd_projects(args, json),
        Commands::Show(args) => cmd_show(args, json),
        Commands::Which(args) => cmd_which(args, json),
        Commands::Search(args) => cmd_search(args, json),
        Commands::Check(args) => cmd_check(args, json),
        Commands::Bench(args) => cmd_bench(args, cli.config.as_deref(), json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a corpus from an explicit splits file. Without --root, projects are
/// assumed to live next to the splits file.
fn load_corpus_args(splits_file: &Path, root: Option<&Path>) -> Result<Corpus, SplitsError> {
    let root = match root {
        Some(r) => r.to_path_buf(),
        None => splits_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    splits_io::load_corpus(splits_file, &root)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_projects(args: ProjectsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus_args(&args.splits_file, args.root.as_deref())?;

    let filter = args
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| format!("invalid --filter regex: {}", e))?;
    let selected: Vec<_> = corpus
        .projects
        .iter()
        .filter(|p| filter.as_ref().is_none_or(|re| re.is_match(&p.name)))
        .collect();

    if json {
        let out = ProjectListJson {
            projects: selected.iter().map(|p| project_summary_to_json(p)).collect(),
            totals: selection_stats(&selected),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_project_listing(&corpus, &selected));
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus_args(&args.splits_file, args.root.as_deref())?;
    let project = corpus
        .project(&args.project)
        .ok_or_else(|| format!("no project named '{}' in {}", args.project, args.splits_file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&project_to_json(project))?);
    } else {
        print_lines(&format_project_detail(project));
    }
    Ok(())
}

fn cmd_which(args: WhichArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus_args(&args.splits_file, args.root.as_deref())?;

    if let Some(name) = &args.project
        && corpus.project(name).is_none()
    {
        return Err(format!("no project named '{}' in {}", name, args.splits_file.display()).into());
    }

    let mut hits = Vec::new();
    for project in &corpus.projects {
        if let Some(name) = &args.project
            && &project.name != name
        {
            continue;
        }
        for split in [Split::Train, Split::Test] {
            if project.contains_file(&args.file, split) {
                hits.push(WhichHitJson {
                    project: project.name.clone(),
                    split,
                });
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("{}: not in any split", args.file);
    } else {
        for hit in &hits {
            println!("{}: {}/{}", args.file, hit.project, hit.split);
        }
    }
    Ok(())
}

fn cmd_search(args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus_args(&args.splits_file, args.root.as_deref())?;
    let re = Regex::new(&args.pattern).map_err(|e| format!("invalid regex: {}", e))?;
    let hits = search::search_files(&corpus, &re);

    if json {
        let out: Vec<_> = hits.iter().map(file_hit_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for hit in &hits {
            println!("{}", format_file_hit(hit));
        }
        println!("{} hit(s)", hits.len());
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus_args(&args.splits_file, args.root.as_deref())?;
    let result = check::check_corpus(&corpus);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for error in &result.errors {
            match error {
                check::CheckError::DuplicateProject { name } => {
                    println!("error: duplicate project name '{}'", name);
                }
                check::CheckError::FileInBothSplits { project, file } => {
                    println!("error: {} lists '{}' in both splits", project, file);
                }
            }
        }
        for warning in &result.warnings {
            match warning {
                check::CheckWarning::EmptySwitch { project } => {
                    println!("warning: {} has an empty switch", project);
                }
                check::CheckWarning::NoFiles { project } => {
                    println!("warning: {} declares no files", project);
                }
            }
        }
        if result.valid {
            println!("ok");
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} error(s) found", result.errors.len()).into())
    }
}

fn cmd_bench(
    args: BenchArgs,
    config_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => config_io::read_config_from(path),
        None => config_io::read_config(),
    };
    let bench = crate::model::benchmark::Benchmark::from_path(&args.path)
        .ok_or_else(|| SplitsError::UnknownBenchmark(args.path.clone()))?;
    let corpus = splits_io::load_benchmark(bench, &config)?;

    if json {
        let out = BenchJson {
            benchmark: bench.name().to_string(),
            splits_file: corpus.splits_file.display().to_string(),
            projects_root: corpus.projects_root.display().to_string(),
            projects: corpus.projects.iter().map(project_summary_to_json).collect(),
            totals: corpus_stats(&corpus),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("benchmark: {}", bench);
        println!("splits: {}", corpus.splits_file.display());
        println!("root: {}", corpus.projects_root.display());
        let selected: Vec<_> = corpus.projects.iter().collect();
        print_lines(&format_project_listing(&corpus, &selected));
    }
    Ok(())
}
