//! Tree line formatting
//!
//! `TreeOutput` receives nodes in pre-order from [`TreeDrawer`](crate::tree::TreeDrawer);
//! `IconWriter` renders them as box-drawing lines with icons into any writer.

use std::io::{self, Write};

/// Connector for a child that has later siblings.
pub const BRANCH: &str = "┣ ";
/// Connector for the last child of a directory.
pub const LAST_BRANCH: &str = "┗ ";
/// Indentation under a directory that has later siblings.
pub const PIPE_INDENT: &str = "┃  ";
/// Indentation under the last directory of its parent (and under the root).
pub const BLANK_INDENT: &str = "   ";

/// Marker appended to directories that could not be listed (see `DeniedPolicy::Mark`).
pub const DENIED_NOTE: &str = "(access denied)";

/// Calculate the prefix for the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK_INDENT)
    } else {
        format!("{}{}", prefix, PIPE_INDENT)
    }
}

/// Pick the connector for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Icons placed in front of entry names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub root: String,
    pub folder: String,
    pub file: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            root: "📦".to_string(),
            folder: "📂".to_string(),
            file: "📄".to_string(),
        }
    }
}

/// Receives tree nodes in display order.
pub trait TreeOutput {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()>;

    /// A directory whose contents could not be read.
    fn output_denied(&mut self, name: &str, is_last: bool, prefix: &str) -> io::Result<()>;
}

/// Writes one line per node: `<prefix><connector><icon> <name>`.
pub struct IconWriter<W: Write> {
    out: W,
    icons: Icons,
}

impl<W: Write> IconWriter<W> {
    pub fn new(out: W, icons: Icons) -> Self {
        Self { out, icons }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for IconWriter<W> {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        if is_root {
            return writeln!(self.out, "{} {}", self.icons.root, name);
        }
        let icon = if is_dir {
            &self.icons.folder
        } else {
            &self.icons.file
        };
        writeln!(self.out, "{}{}{} {}", prefix, connector(is_last), icon, name)
    }

    fn output_denied(&mut self, name: &str, is_last: bool, prefix: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}{} {} {}",
            prefix,
            connector(is_last),
            self.icons.folder,
            name,
            DENIED_NOTE
        )
    }
}
