//! Directory tree drawing
//!
//! `TreeDrawer` walks a directory depth-first with an explicit stack and feeds
//! each visible entry to a [`TreeOutput`](crate::output::TreeOutput) in display order.

mod config;
mod walker;

pub use config::{DEFAULT_TREE_FILE, DeniedPolicy, DrawerConfig};
pub use walker::{TreeDrawer, TreeStats};
