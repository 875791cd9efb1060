/// The benchmarks this crate knows how to locate splits data for.
///
/// Dataset paths are mapped to a benchmark by looking for the benchmark's
/// path marker; see [`Benchmark::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    /// Logical Foundations debug corpus
    LfDebug,
    /// Single-project debug corpus
    DebugProj,
    /// CompCert, as laid out under proverbot9001's coq-projects tree
    CompCert,
    /// The CoqGym project collection
    CoqGym,
}

impl Benchmark {
    /// All benchmarks, in dispatch priority order.
    pub const ALL: [Benchmark; 4] = [
        Benchmark::LfDebug,
        Benchmark::DebugProj,
        Benchmark::CompCert,
        Benchmark::CoqGym,
    ];

    /// The path fragment that identifies this benchmark in a dataset path.
    pub fn path_marker(self) -> &'static str {
        match self {
            Benchmark::LfDebug => "lf_debug",
            Benchmark::DebugProj => "debug_proj",
            Benchmark::CompCert => "compcert",
            Benchmark::CoqGym => "coqgym",
        }
    }

    /// Short name used in config sections, messages, and `--json` output.
    pub fn name(self) -> &'static str {
        match self {
            Benchmark::LfDebug => "lf-debug",
            Benchmark::DebugProj => "debug-proj",
            Benchmark::CompCert => "compcert",
            Benchmark::CoqGym => "coqgym",
        }
    }

    /// Identify the benchmark a dataset path refers to. Markers are checked
    /// in [`Benchmark::ALL`] order; the first match wins.
    pub fn from_path(path: &str) -> Option<Benchmark> {
        Benchmark::ALL.into_iter().find(|b| path.contains(b.path_marker()))
    }

    /// Built-in corpus locations, overridable via `benchmarks.toml`.
    /// `(projects_root, splits_file)`, home-relative.
    pub fn default_paths(self) -> Option<(&'static str, &'static str)> {
        match self {
            Benchmark::CompCert => Some((
                "~/proverbot9001/coq-projects",
                "~/proverbot9001/compcert_projs_splits.json",
            )),
            _ => None,
        }
    }

    /// Project count the benchmark's splits file must declare, where fixed.
    /// CompCert is a single-project corpus; a different count means the
    /// splits file was mis-authored.
    pub fn expected_projects(self) -> Option<usize> {
        match self {
            Benchmark::CompCert => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_matches_marker() {
        assert_eq!(Benchmark::from_path("/x/compcert/y"), Some(Benchmark::CompCert));
        assert_eq!(Benchmark::from_path("~/data/coqgym_split"), Some(Benchmark::CoqGym));
        assert_eq!(Benchmark::from_path("lf_debug"), Some(Benchmark::LfDebug));
        assert_eq!(Benchmark::from_path("runs/debug_proj/v1"), Some(Benchmark::DebugProj));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(Benchmark::from_path("/nonsense"), None);
        assert_eq!(Benchmark::from_path(""), None);
    }

    #[test]
    fn test_from_path_priority_order() {
        // A path naming several benchmarks resolves to the earliest in ALL.
        assert_eq!(
            Benchmark::from_path("/corpora/lf_debug/compcert"),
            Some(Benchmark::LfDebug)
        );
    }

    #[test]
    fn test_compcert_defaults_present() {
        assert!(Benchmark::CompCert.default_paths().is_some());
        assert_eq!(Benchmark::CompCert.expected_projects(), Some(1));
    }

    #[test]
    fn test_placeholders_have_no_defaults() {
        for b in [Benchmark::LfDebug, Benchmark::DebugProj, Benchmark::CoqGym] {
            assert!(b.default_paths().is_none());
            assert!(b.expected_projects().is_none());
        }
    }
}
