//! CLI entry point for the icon tree drawer

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use natree::console::{ColorMode, init_logging, report_info, report_success, should_use_color};
use natree::{DEFAULT_TREE_FILE, DeniedPolicy, DrawerConfig, ExcludeSet, MatchMode, TreeDrawer};

#[derive(Parser, Debug)]
#[command(name = "treedraw")]
#[command(about = "Write a box-drawing tree of a directory, with icons, to a text file")]
#[command(version)]
struct Args {
    /// Directory to draw
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the tree to
    #[arg(short, long, default_value = DEFAULT_TREE_FILE)]
    output: PathBuf,

    /// Exclude an additional directory name (can be used multiple times)
    #[arg(short = 'E', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Start from an empty exclusion set instead of the built-in one
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Match excluded names against entry names only, not path substrings
    #[arg(long = "strict-exclude")]
    strict_exclude: bool,

    /// Show unreadable directories with an "(access denied)" marker instead of omitting them
    #[arg(long = "mark-denied")]
    mark_denied: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

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
    let root = absolute(&cwd, &args.path);
    let output = absolute(&cwd, &args.output);

    let base = if args.no_default_excludes {
        ExcludeSet::empty()
    } else {
        ExcludeSet::default()
    };
    let mode = if args.strict_exclude {
        MatchMode::Segment
    } else {
        MatchMode::Substring
    };
    let exclude = base.with_names(args.exclude.iter().cloned()).with_mode(mode);

    let config = DrawerConfig {
        exclude,
        on_denied: if args.mark_denied {
            DeniedPolicy::Mark
        } else {
            DeniedPolicy::Skip
        },
        max_depth: args.level,
        skip: vec![output.clone()],
        ..Default::default()
    };

    let stats = match TreeDrawer::new(config).render_to_file(&root, &output) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("treedraw: {}", e);
            process::exit(1);
        }
    };
    if stats.skipped > 0 {
        log::info!("{} directories could not be read", stats.skipped);
    }

    let message = format!("Generated file: {}", args.output.display());
    let result = report_success(&message, should_use_color(args.color)).and_then(|_| {
        report_info(&format!(
            "{} directories, {} files",
            stats.directories, stats.files
        ))
    });
    if let Err(e) = result {
        eprintln!("treedraw: error writing output: {}", e);
        process::exit(1);
    }
}
