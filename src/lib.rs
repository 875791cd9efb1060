//! Train/test split metadata for Coq proof corpora.
//!
//! A splits file is a JSON array of per-project records: the project's name,
//! its train and test file lists, the opam switch it builds under, and
//! optional build metadata. This crate loads those files into typed values
//! ([`model::Corpus`], [`model::ProjectSplit`]), answers membership questions
//! ("is this file in the train split of this project?"), and maps dataset
//! paths to known benchmarks ([`model::Benchmark`]).

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod util;

pub use io::splits_io::SplitsError;
pub use model::{Benchmark, Corpus, ProjectSplit, RawProjectSplit, Split};
