//! Exclusion set for the tree drawer

use std::collections::BTreeSet;
use std::path::Path;

/// Directory names skipped by default: version control, dependency caches,
/// virtualenvs, build output and IDE metadata.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "venv",
    "env",
    "__pycache__",
    "node_modules",
    ".git",
    ".next",
    "dist",
    ".idea",
];

/// How excluded names are matched against entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact name match, or an excluded name occurring anywhere in the
    /// root-relative path. Broad: `environment.rs` is dropped because of `env`.
    #[default]
    Substring,
    /// Exact name match only.
    Segment,
}

/// Set of names that are never listed nor descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    names: BTreeSet<String>,
    mode: MatchMode,
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

impl ExcludeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            mode: MatchMode::default(),
        }
    }

    /// An empty set; nothing is excluded.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    pub fn with_names<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether an entry called `name`, at `relative` below the walk root, is excluded.
    pub fn is_excluded(&self, relative: &Path, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        match self.mode {
            MatchMode::Segment => false,
            MatchMode::Substring => {
                let joined = relative.to_string_lossy();
                self.names.iter().any(|excluded| joined.contains(excluded.as_str()))
            }
        }
    }
}
