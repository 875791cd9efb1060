use std::path::{Path, PathBuf};

/// Canonicalize a filename for split membership checks.
///
/// Splits files list bare names like `problems.v` while callers pass
/// whatever the build or data pipeline produced (`./theories//problems.v`,
/// padded with whitespace, etc.). Membership is tested as substring
/// containment against this canonical form.
pub fn normalize_filename(filename: &str) -> String {
    let mut name = filename.trim();
    while let Some(rest) = name.strip_prefix("./") {
        name = rest;
    }
    let mut out = name.to_string();
    while out.contains("//") {
        out = out.replace("//", "/");
    }
    out
}

/// Expand a leading `~` or `~/` to the user's home directory.
/// Paths without the marker are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return home_dir();
    }
    if let Some(rest) = s.strip_prefix("~/") {
        return home_dir().join(rest);
    }
    path.to_path_buf()
}

/// Get the user's home directory
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}
