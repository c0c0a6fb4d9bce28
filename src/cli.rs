//! Command-line interface for pyreview.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::check::Reviewer;
use crate::config::{self, ReviewConfig};
use crate::report;
use crate::summary::ReviewSummary;
use crate::syntax;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default review config written by `init`.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Automated code review for Python source files.
///
/// Pyreview scans Python files for five categories of issues: hardcoded
/// secrets, risky operations without error handling, overlong functions,
/// missing docstrings, and naming convention violations.
#[derive(Parser)]
#[command(name = "pyreview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review files or directories
    #[command(visible_alias = "check")]
    Review(ReviewArgs),
    /// Create a pyreview config file
    Init(InitArgs),
}

/// Arguments for the review command.
#[derive(Parser)]
pub struct ReviewArgs {
    /// Paths to review (files or directories)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, markdown, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "pyreview.yaml")]
    pub output: PathBuf,
}

/// Collect reviewable files under a root directory.
fn collect_files(root: &Path, config: &ReviewConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories
            if e.file_type().is_dir() && name.starts_with('.') && e.depth() > 0 {
                return false;
            }
            // Skip caches, environments, and vendored trees
            if e.file_type().is_dir()
                && (name == "__pycache__"
                    || name == "venv"
                    || name == "node_modules"
                    || name == "site-packages")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

            if syntax::for_extension(ext).is_some() && !config.is_path_excluded(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Resolve the review config: explicit path, discovered file, or defaults.
fn resolve_config(explicit: Option<&PathBuf>) -> anyhow::Result<ReviewConfig> {
    let path = match explicit {
        Some(p) => Some(p.clone()),
        None => config::discover(),
    };

    match path {
        Some(p) => {
            let cfg = ReviewConfig::parse_file(&p)
                .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))?;
            config::validate(&cfg)?;
            Ok(cfg)
        }
        None => Ok(ReviewConfig::default()),
    }
}

/// Run the review command.
pub fn run_review(args: &ReviewArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "markdown" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'markdown', or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let cfg = resolve_config(args.config.as_ref())?;

    // Collect files to review
    let mut files = Vec::new();
    for path in &args.paths {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: cannot access path {:?}: {}", path, e);
                return Ok(EXIT_ERROR);
            }
        };

        if metadata.is_dir() {
            files.extend(collect_files(path, &cfg)?);
        } else if !cfg.is_path_excluded(path) {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        eprintln!("Warning: no files to review");
        return Ok(EXIT_SUCCESS);
    }

    // Review files in parallel; each file is independent and the reviewer
    // holds no per-file state.
    let reviewer = Reviewer::with_config(cfg);
    let reports: Vec<report::FileReport> = files
        .par_iter()
        .filter_map(|path| {
            let path_str = path.to_string_lossy().to_string();
            match std::fs::read_to_string(path) {
                Ok(content) => Some((path_str.clone(), reviewer.review_file(&path_str, &content))),
                Err(e) => {
                    eprintln!("Error reading {}: {}", path_str, e);
                    None
                }
            }
        })
        .collect();

    let summary = ReviewSummary::from_reports(&reports);

    match args.format.as_str() {
        "json" => report::write_json(&reports, &summary)?,
        "markdown" => report::write_markdown(&reports),
        _ => report::write_pretty(&reports, &summary),
    }

    if summary.has_errors() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize for your project", args.output.display());
    println!("  2. Run: pyreview review . --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}
