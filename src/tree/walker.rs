//! TreeDrawer - renders a directory tree with an explicit work stack

use std::fs::{self, File, ReadDir};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result, check_dir};
use crate::lister::entry_name;
use crate::output::{IconWriter, TreeOutput, continuation_prefix};

use super::config::{DeniedPolicy, DrawerConfig};

/// Counts reported after a successful render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Directories shown below the root
    pub directories: usize,
    pub files: usize,
    /// Directories that could not be listed
    pub skipped: usize,
}

/// A filtered directory entry.
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Canonical paths of the directories above the one being drawn.
struct Ancestry {
    dir: PathBuf,
    parent: Option<Rc<Ancestry>>,
}

impl Ancestry {
    fn contains(&self, dir: &Path) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.dir == dir {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }
}

/// Pending work, popped in LIFO order to keep pre-order output.
enum Work {
    Dir {
        name: String,
        path: PathBuf,
        prefix: Rc<str>,
        is_last: bool,
        depth: usize,
        ancestry: Rc<Ancestry>,
    },
    File {
        name: String,
        prefix: Rc<str>,
        is_last: bool,
    },
}

/// Opens a directory for listing.
type OpenDir = fn(&Path) -> io::Result<ReadDir>;

fn read_dir(path: &Path) -> io::Result<ReadDir> {
    fs::read_dir(path)
}

/// Draws a box-drawing tree of a directory.
pub struct TreeDrawer {
    config: DrawerConfig,
    open_dir: OpenDir,
}

impl TreeDrawer {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            open_dir: read_dir,
        }
    }

    /// Replace how directories are opened, to simulate listing failures.
    #[cfg(test)]
    fn with_open_dir(mut self, open_dir: OpenDir) -> Self {
        self.open_dir = open_dir;
        self
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Render the tree rooted at `root` into `output`.
    ///
    /// Failure to list the root is returned before anything is written.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<TreeStats> {
        let children = self.list_root(root)?;
        self.draw(root, children, output).map_err(|e| Error::Io {
            path: root.to_path_buf(),
            source: e,
        })
    }

    /// Render into a string, mainly for tests and previews.
    pub fn render_to_string(&self, root: &Path) -> Result<String> {
        let mut writer = IconWriter::new(Vec::new(), self.config.icons.clone());
        self.render(root, &mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Render into `output_path`, creating or truncating it.
    ///
    /// The file is only created once the root has been listed successfully.
    pub fn render_to_file(&self, root: &Path, output_path: &Path) -> Result<TreeStats> {
        let children = self.list_root(root)?;

        let file = File::create(output_path).map_err(|e| Error::from_io(output_path, e))?;
        let mut writer = IconWriter::new(BufWriter::new(file), self.config.icons.clone());
        let stats = self
            .draw(root, children, &mut writer)
            .and_then(|stats| writer.flush().map(|_| stats))
            .map_err(|e| Error::Io {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        Ok(stats)
    }

    fn list_root(&self, root: &Path) -> Result<Vec<Child>> {
        check_dir(root)?;
        (self.open_dir)(root)
            .and_then(|entries| self.collect_children(root, entries))
            .map_err(|e| Error::from_io(root, e))
    }

    fn draw<O: TreeOutput>(
        &self,
        root: &Path,
        root_children: Vec<Child>,
        output: &mut O,
    ) -> io::Result<TreeStats> {
        let mut stats = TreeStats::default();

        output.output_node(&root_name(root), true, true, "", true)?;
        if self.at_max_depth(0) {
            return Ok(stats);
        }

        let ancestry = Rc::new(Ancestry {
            dir: canonical(root),
            parent: None,
        });
        let mut stack = Vec::new();
        // The root counts as a last sibling for indentation purposes
        Self::push_children(&mut stack, root_children, &continuation_prefix("", true), 1, &ancestry);

        while let Some(work) = stack.pop() {
            match work {
                Work::File {
                    name,
                    prefix,
                    is_last,
                } => {
                    output.output_node(&name, false, is_last, &prefix, false)?;
                    stats.files += 1;
                }
                Work::Dir {
                    name,
                    path,
                    prefix,
                    is_last,
                    depth,
                    ancestry,
                } => {
                    let dir = canonical(&path);
                    if ancestry.contains(&dir) {
                        log::warn!("not following symlink cycle at {}", path.display());
                        output.output_node(&name, true, is_last, &prefix, false)?;
                        stats.directories += 1;
                        continue;
                    }
                    if self.at_max_depth(depth) {
                        output.output_node(&name, true, is_last, &prefix, false)?;
                        stats.directories += 1;
                        continue;
                    }

                    let children = match (self.open_dir)(&path)
                        .and_then(|entries| self.collect_children(root, entries))
                    {
                        Ok(children) => children,
                        Err(e) => {
                            log::debug!("cannot list {}: {}", path.display(), e);
                            stats.skipped += 1;
                            if self.config.on_denied == DeniedPolicy::Mark {
                                output.output_denied(&name, is_last, &prefix)?;
                            }
                            continue;
                        }
                    };

                    output.output_node(&name, true, is_last, &prefix, false)?;
                    stats.directories += 1;

                    let ancestry = Rc::new(Ancestry {
                        dir,
                        parent: Some(ancestry),
                    });
                    let child_prefix = continuation_prefix(&prefix, is_last);
                    Self::push_children(&mut stack, children, &child_prefix, depth + 1, &ancestry);
                }
            }
        }

        Ok(stats)
    }

    /// Push children in reverse so the first child is popped first.
    fn push_children(
        stack: &mut Vec<Work>,
        children: Vec<Child>,
        prefix: &str,
        depth: usize,
        ancestry: &Rc<Ancestry>,
    ) {
        let prefix: Rc<str> = Rc::from(prefix);
        let count = children.len();
        for (idx, child) in children.into_iter().enumerate().rev() {
            let is_last = idx + 1 == count;
            let work = if child.is_dir {
                Work::Dir {
                    name: child.name,
                    path: child.path,
                    prefix: Rc::clone(&prefix),
                    is_last,
                    depth,
                    ancestry: Rc::clone(ancestry),
                }
            } else {
                Work::File {
                    name: child.name,
                    prefix: Rc::clone(&prefix),
                    is_last,
                }
            };
            stack.push(work);
        }
    }

    /// Filter and order the entries of one directory: subdirectories first,
    /// then everything else, each group in plain string order.
    fn collect_children(&self, root: &Path, entries: ReadDir) -> io::Result<Vec<Child>> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let name = entry_name(&entry);

            if self.config.skip.iter().any(|skip| *skip == path) {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(path.as_path());
            if self.config.exclude.is_excluded(relative, &name) {
                log::debug!("excluded {}", relative.display());
                continue;
            }

            // Follows symlinks; dangling links and special files land with the files
            let is_dir = path.is_dir();
            let child = Child { name, path, is_dir };
            if is_dir {
                dirs.push(child);
            } else {
                files.push(child);
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.extend(files);
        Ok(dirs)
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Display name of the root: its last component, resolving `.` and `..` if needed.
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
