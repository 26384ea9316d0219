//! Natural-sort file lister
//!
//! Lists the regular files directly inside a directory, ordered by
//! [`NaturalKey`](crate::natural::NaturalKey), and writes them one per line.

use std::fs::{DirEntry, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ensure_dir};
use crate::natural::sort_natural;

/// Default output file name for the lister.
pub const DEFAULT_LIST_FILE: &str = "files_list.txt";

/// Configuration for [`list_files`].
#[derive(Debug, Clone, Default)]
pub struct ListerConfig {
    /// Paths never listed, compared after joining with the listed directory.
    /// The CLI passes its own output file so reruns stay byte-identical.
    pub skip: Vec<PathBuf>,
}

impl ListerConfig {
    pub fn with_skip(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip.push(path.into());
        self
    }
}

/// Names of the regular files directly inside `dir`, in natural order.
///
/// The type test follows symlinks: a link to a file is listed, a link to a
/// directory or a dangling link is not.
pub fn list_files(dir: &Path, config: &ListerConfig) -> Result<Vec<String>> {
    let entries = ensure_dir(dir)?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(dir, e))?;
        let path = entry.path();

        if config.skip.iter().any(|skip| *skip == path) {
            log::debug!("skipping {}", path.display());
            continue;
        }
        if !path.is_file() {
            continue;
        }
        names.push(entry_name(&entry));
    }

    // Enumeration order is filesystem-dependent; fix it before the stable sort
    names.sort();
    sort_natural(&mut names);
    Ok(names)
}

/// The entry's file name as UTF-8. Invalid sequences become U+FFFD.
pub(crate) fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().into_string().unwrap_or_else(|raw| {
        let lossy = raw.to_string_lossy().to_string();
        log::debug!(
            "name {:?} in {} is not valid UTF-8, shown as {:?}",
            raw,
            entry.path().parent().unwrap_or(Path::new("")).display(),
            lossy
        );
        lossy
    })
}

/// Write names newline-separated with no trailing newline.
pub fn write_listing<W: Write>(names: &[String], out: &mut W) -> std::io::Result<()> {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(name.as_bytes())?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the listing into it.
pub fn write_listing_file(names: &[String], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    write_listing(names, &mut out)
        .and_then(|_| out.flush())
        .map_err(|e| Error::from_io(path, e))
}
