//! Configuration types for the tree drawer

use std::path::PathBuf;

use crate::exclude::ExcludeSet;
use crate::output::Icons;

/// Default output file name for the tree drawer.
pub const DEFAULT_TREE_FILE: &str = "tree.txt";

/// What to do with a non-root directory whose contents cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeniedPolicy {
    /// Omit the directory entirely, header included.
    #[default]
    Skip,
    /// Emit the header with an "(access denied)" marker and no children.
    Mark,
}

/// Configuration for tree drawing behavior.
#[derive(Debug, Clone, Default)]
pub struct DrawerConfig {
    pub exclude: ExcludeSet,
    pub icons: Icons,
    pub on_denied: DeniedPolicy,
    /// Directories at this depth are shown but not descended into (root is depth 0)
    pub max_depth: Option<usize>,
    /// Paths never shown, such as the output file itself
    pub skip: Vec<PathBuf>,
}
