//! CLI entry point for the natural-sort file lister

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use natree::console::{ColorMode, init_logging, report_success, should_use_color};
use natree::{DEFAULT_LIST_FILE, ListerConfig, list_files, write_listing_file};

#[derive(Parser, Debug)]
#[command(name = "natls")]
#[command(about = "Write the files of a directory, in natural sort order, to a text file")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the listing to
    #[arg(short, long, default_value = DEFAULT_LIST_FILE)]
    output: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn main() {
    init_logging();
    let args = Args::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir = absolute(&cwd, &args.path);
    let output = absolute(&cwd, &args.output);

    // Never list our own output, so reruns give the same result
    let config = ListerConfig::default().with_skip(output.clone());

    let names = match list_files(&dir, &config) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("natls: {}", e);
            process::exit(1);
        }
    };
    log::debug!("listed {} files in {}", names.len(), dir.display());

    if let Err(e) = write_listing_file(&names, &output) {
        eprintln!("natls: {}", e);
        process::exit(1);
    }

    let message = format!(
        "Created {} with {} files",
        args.output.display(),
        names.len()
    );
    if let Err(e) = report_success(&message, should_use_color(args.color)) {
        eprintln!("natls: error writing output: {}", e);
        process::exit(1);
    }
}
