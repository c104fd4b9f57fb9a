//! sizetree - size and level statistics over a serialized file tree.
//!
//! Usage:
//!   sizetree [FILE]             Full report
//!   sizetree total [FILE]       Total size of the tree
//!   sizetree folders [FILE]     Total size of every folder
//!   sizetree levels [FILE]      Node names grouped by depth
//!   sizetree --help             Show help
//!
//! FILE is a JSON tree (`{"name": .., "size": .., "children": [..]}`);
//! omit it or pass `-` to read from stdin.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;

use sizetree_analyze::{Levels, TreeReport, folder_sizes, level_order, total_size};
use sizetree_core::{FolderOrder, Node, ReportConfig, load};

#[derive(Parser)]
#[command(
    name = "sizetree",
    version,
    about = "Size and level statistics over a file tree",
    long_about = "sizetree reads a file tree described as nested JSON and reports \
                  total sizes, per-folder sizes and the names found at each depth."
)]
struct Cli {
    /// Tree document to read (defaults to stdin). Used by a subcommand that
    /// is not given its own file.
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Show sizes in binary units (KiB, MiB, ...)
    #[arg(short = 'H', long, global = true)]
    human: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the full report (default)
    Report {
        /// Tree document to read
        file: Option<PathBuf>,

        /// Maximum number of levels to show
        #[arg(short, long)]
        max_levels: Option<usize>,

        /// Folder ordering (post-order, size-desc, name)
        #[arg(short, long, default_value = "post-order")]
        sort: FolderOrder,
    },

    /// Show the total size of the tree
    Total {
        /// Tree document to read
        file: Option<PathBuf>,
    },

    /// Show the total size of every folder
    Folders {
        /// Tree document to read
        file: Option<PathBuf>,

        /// Folder ordering (post-order, size-desc, name)
        #[arg(short, long, default_value = "post-order")]
        sort: FolderOrder,
    },

    /// Show node names grouped by depth
    Levels {
        /// Tree document to read
        file: Option<PathBuf>,

        /// Maximum number of levels to show
        #[arg(short, long)]
        max_levels: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format;
    let default_file = cli.file;
    let mut config = ReportConfig::builder();
    config.human_readable(cli.human);

    match cli.command {
        Some(Command::Report {
            file,
            max_levels,
            sort,
        }) => {
            let config = config
                .max_levels(max_levels)
                .folder_order(sort)
                .build()
                .context("Invalid report options")?;
            let root = read_tree(file.or(default_file).as_deref())?;
            run_report(&root, &config, format)?;
        }
        Some(Command::Total { file }) => {
            let config = config.build().context("Invalid report options")?;
            let root = read_tree(file.or(default_file).as_deref())?;
            run_total(&root, &config, format)?;
        }
        Some(Command::Folders { file, sort }) => {
            let config = config
                .folder_order(sort)
                .build()
                .context("Invalid report options")?;
            let root = read_tree(file.or(default_file).as_deref())?;
            run_folders(&root, &config, format)?;
        }
        Some(Command::Levels { file, max_levels }) => {
            let config = config
                .max_levels(max_levels)
                .build()
                .context("Invalid report options")?;
            let root = read_tree(file.or(default_file).as_deref())?;
            run_levels(&root, &config, format)?;
        }
        None => {
            let config = config.build().context("Invalid report options")?;
            let root = read_tree(default_file.as_deref())?;
            run_report(&root, &config, format)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read a tree from a file, or from stdin for `None` and `-`.
fn read_tree(file: Option<&Path>) -> Result<Node> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading tree");
            load::from_path(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        _ => {
            tracing::debug!("reading tree from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            load::from_str(&input).context("Failed to parse tree from stdin")
        }
    }
}

/// Print the full report.
fn run_report(root: &Node, config: &ReportConfig, format: OutputFormat) -> Result<()> {
    let report = TreeReport::build(Some(root));

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(" {} - {}", root.name, config.format_size(report.total_size));
            println!(
                " {} nodes ({} files, {} folders), {} levels",
                report.node_count, report.file_count, report.folder_count, report.depth
            );
            println!("{}", "─".repeat(60));
            println!();

            println!(" Folders:");
            print_folders(&report, config);
            println!();

            println!(" Levels:");
            print_levels(&report.levels, config);
            println!();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.arranged(config))?);
        }
    }

    Ok(())
}

/// Print the total size.
fn run_total(root: &Node, config: &ReportConfig, format: OutputFormat) -> Result<()> {
    let total = total_size(Some(root));

    match format {
        OutputFormat::Text => println!("{}", config.format_size(total)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "total_size": total }))?
            );
        }
    }

    Ok(())
}

/// Print every folder's total size.
fn run_folders(root: &Node, config: &ReportConfig, format: OutputFormat) -> Result<()> {
    let report = TreeReport {
        folders: folder_sizes(Some(root)),
        ..TreeReport::default()
    };

    match format {
        OutputFormat::Text => print_folders(&report, config),
        OutputFormat::Json => {
            let ordered: IndexMap<_, _> = report
                .folders_sorted(config.folder_order)
                .into_iter()
                .collect();
            println!("{}", serde_json::to_string_pretty(&ordered)?);
        }
    }

    Ok(())
}

/// Print node names grouped by depth.
fn run_levels(root: &Node, config: &ReportConfig, format: OutputFormat) -> Result<()> {
    let levels = level_order(Some(root));

    match format {
        OutputFormat::Text => print_levels(&levels, config),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(config.visible_levels(&levels))?
            );
        }
    }

    Ok(())
}

fn print_folders(report: &TreeReport, config: &ReportConfig) {
    let folders = report.folders_sorted(config.folder_order);
    if folders.is_empty() {
        println!("   (no folders)");
        return;
    }

    let width = folders
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, size) in folders {
        println!("   {:<width$}  {:>12}", name.as_str(), config.format_size(size));
    }
}

fn print_levels(levels: &Levels, config: &ReportConfig) {
    let visible = config.visible_levels(levels);
    for (depth, level) in visible.iter().enumerate() {
        let names: Vec<&str> = level.iter().map(|name| name.as_str()).collect();
        println!("   {depth}: {}", names.join(", "));
    }

    let hidden = levels.len() - visible.len();
    if hidden > 0 {
        println!("   ... and {hidden} more levels");
    }
}
