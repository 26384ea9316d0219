//! natree - list files in natural order and draw directory trees with icons

pub mod console;
pub mod error;
pub mod exclude;
pub mod lister;
pub mod natural;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use exclude::{DEFAULT_EXCLUDES, ExcludeSet, MatchMode};
pub use lister::{DEFAULT_LIST_FILE, ListerConfig, list_files, write_listing, write_listing_file};
pub use natural::{KeyPart, NaturalKey, natural_cmp, sort_natural};
pub use output::{IconWriter, Icons, TreeOutput};
pub use tree::{DEFAULT_TREE_FILE, DeniedPolicy, DrawerConfig, TreeDrawer, TreeStats};
