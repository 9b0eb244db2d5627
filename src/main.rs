//! drivetree - inspect and edit in-memory drive/directory/file trees.
//!
//! Usage:
//!   drivetree print                 Print the tree, one entry per line
//!   drivetree resolve 0/1           Show the entry at an index path
//!   drivetree rename 0/0 NAME       Rename an entry and print the result
//!   drivetree remove 0/1            Remove an entry and print the result
//!   drivetree stats                 Summary counts
//!   drivetree find PATTERN          Glob search over entry names
//!   drivetree check                 Report structural issues
//!   drivetree export                Dump the tree as JSON
//!
//! Every command works on a built-in sample tree unless `--input` names a
//! JSON fixture.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use tracing::debug;

use drivetree_core::{Entry, TreePath, TreeStats};
use drivetree_report::{RenderConfig, find_matching, render, render_subtree, validate};

#[derive(Parser)]
#[command(
    name = "drivetree",
    version,
    about = "Inspect and edit in-memory drive/directory/file trees",
    long_about = "drivetree loads a tree of drives, directories and files from a JSON \
                  fixture (or uses a built-in sample) and runs path-based lookups, \
                  renames and removals on it."
)]
struct Cli {
    /// JSON fixture describing the root entry (defaults to a built-in sample)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tree, indented by path depth
    Print {
        /// Index path of the subtree to print (e.g. "0/1"; empty for root)
        #[arg(default_value = "")]
        path: TreePath,

        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<usize>,

        /// Indent string repeated per level
        #[arg(long, default_value = "\t")]
        indent: String,

        /// Append '/' to drives and directories
        #[arg(short, long)]
        markers: bool,

        /// Show each entry's index path
        #[arg(short = 'p', long)]
        show_paths: bool,
    },

    /// Show the entry at an index path
    Resolve {
        /// Index path (e.g. "0/1")
        path: TreePath,
    },

    /// Rename the entry at an index path, then print the tree
    Rename {
        /// Index path (e.g. "0/0")
        path: TreePath,

        /// New name
        name: String,
    },

    /// Remove the entry at an index path, then print the tree
    Remove {
        /// Index path of the entry to remove (must not be the root)
        path: TreePath,
    },

    /// Show summary counts
    Stats {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find entries whose name matches a glob pattern
    Find {
        /// Glob pattern (e.g. "*.txt")
        pattern: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Report empty names, nested drives and duplicate sibling names
    Check,

    /// Export the tree as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_tracing(cli.log_level);

    let mut root = load_root(cli.input.as_deref())?;

    match cli.command {
        Command::Print {
            path,
            depth,
            indent,
            markers,
            show_paths,
        } => {
            let config = RenderConfig::builder()
                .indent(indent)
                .max_depth(depth)
                .mark_containers(markers)
                .show_paths(show_paths)
                .build()
                .map_err(|e| eyre!("Invalid render options: {e}"))?;
            let text = render_subtree(&root, &path, &config)
                .wrap_err_with(|| format!("Cannot print {path}"))?;
            print!("{text}");
        }
        Command::Resolve { path } => {
            let entry = root
                .resolve(&path)
                .wrap_err_with(|| format!("Cannot resolve {path}"))?;
            println!("{path} {} {}", entry.kind(), entry.name());
            if let Some(container) = entry.as_container() {
                println!("  {} children", container.child_count());
            }
        }
        Command::Rename { path, name } => {
            root.resolve_mut(&path)
                .and_then(|entry| entry.rename(name))
                .wrap_err_with(|| format!("Cannot rename {path}"))?;
            print!("{}", render(&root, &RenderConfig::default()));
        }
        Command::Remove { path } => {
            run_remove(&mut root, &path)?;
            print!("{}", render(&root, &RenderConfig::default()));
        }
        Command::Stats { format } => {
            run_stats(&root, format)?;
        }
        Command::Find { pattern, format } => {
            run_find(&root, &pattern, format)?;
        }
        Command::Check => {
            let issues = validate(&root);
            if issues.is_empty() {
                println!("No issues found.");
            }
            for issue in &issues {
                println!("{:?}: {}", issue.kind, issue.message);
            }
        }
        Command::Export { output } => {
            run_export(&root, output)?;
        }
    }

    Ok(())
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Load the root entry from a JSON fixture, or build the sample tree.
fn load_root(input: Option<&Path>) -> Result<Entry> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "loading fixture");
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Cannot read {}", path.display()))?;
            serde_json::from_str(&json)
                .wrap_err_with(|| format!("Invalid tree fixture {}", path.display()))
        }
        None => Ok(sample_tree()),
    }
}

/// Built-in tree used when no fixture is given.
fn sample_tree() -> Entry {
    Entry::drive(
        'a',
        [
            Entry::directory(
                "Animals",
                [
                    Entry::file("Aardvark"),
                    Entry::directory("Birds", [Entry::file("Albatross"), Entry::file("Auk")]),
                ],
            ),
            Entry::directory("Plants", [Entry::file("Acacia")]),
            Entry::file("readme.txt"),
        ],
    )
}

/// Remove the entry at `path` from its parent.
fn run_remove(root: &mut Entry, path: &TreePath) -> Result<()> {
    let (parent, index) = path
        .parent()
        .zip(path.last())
        .ok_or_else(|| eyre!("Cannot remove the root entry"))?;

    let removed = root
        .resolve_mut(&parent)
        .and_then(|entry| entry.remove_at(index))
        .wrap_err_with(|| format!("Cannot remove {path}"))?;

    eprintln!("Removed {} '{}'", removed.kind(), removed.name());
    Ok(())
}

/// Print summary counts.
fn run_stats(root: &Entry, format: OutputFormat) -> Result<()> {
    let stats = TreeStats::collect(root);

    match format {
        OutputFormat::Text => {
            println!("{}", "─".repeat(40));
            println!(" {} entries", stats.total_entries);
            println!(
                " {} drives, {} directories, {} files",
                stats.drives, stats.directories, stats.files
            );
            println!(" Max depth: {}", stats.max_depth);
            if let Some((path, count)) = &stats.widest {
                println!(" Widest container: {path} ({count} children)");
            }
            println!("{}", "─".repeat(40));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// Print entries matching a glob pattern.
fn run_find(root: &Entry, pattern: &str, format: OutputFormat) -> Result<()> {
    let found = find_matching(root, pattern)?;

    match format {
        OutputFormat::Text => {
            if found.is_empty() {
                println!("No entries match '{pattern}'.");
            }
            for entry in &found {
                println!("{:<16} {:<10} {}", entry.path.to_string(), entry.kind, entry.name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
    }

    Ok(())
}

/// Export the tree as JSON.
fn run_export(root: &Entry, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(root)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
