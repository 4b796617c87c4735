#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;
mod snapshot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "orgh: time-versioned organization hierarchy tool",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Snapshot file (overrides ORGH_SNAPSHOT and .orgh.toml).
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Show the organization tree as of a date",
        after_help = "EXAMPLES:\n    # Today's hierarchy\n    orgh tree --date 2024-06-01\n\n    # Machine-readable nested tree\n    orgh tree --date 2024-06-01 --json"
    )]
    Tree(cmd::tree::TreeArgs),

    #[command(
        about = "List attribute records active at a date",
        after_help = "EXAMPLES:\n    orgh active --date 2024-06-01\n    orgh active --date 2024-06-01 --json"
    )]
    Active(cmd::active::ActiveArgs),

    #[command(
        about = "Show one department's versioned parent history",
        after_help = "EXAMPLES:\n    orgh history D100\n    orgh history D100 --json"
    )]
    History(cmd::history::HistoryArgs),

    #[command(
        about = "List all transitive descendants of a department",
        after_help = "EXAMPLES:\n    orgh descendants D100\n    orgh descendants D100 --json"
    )]
    Descendants(cmd::descendants::DescendantsArgs),

    #[command(
        name = "check-move",
        about = "Check whether a reparenting move is safe",
        long_about = "Check whether giving a department a new parent would make it \
its own ancestor. Use \"--parent none\" for a move to top level.",
        after_help = "EXAMPLES:\n    orgh check-move D230 --parent D100\n    orgh check-move D230 --parent none"
    )]
    CheckMove(cmd::check_move::CheckMoveArgs),

    #[command(
        about = "Export the hierarchy with departments as JSON",
        after_help = "EXAMPLES:\n    orgh export --date 2024-06-01 > org.json"
    )]
    Export(cmd::export::ExportArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ORGH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = cli.output_mode();
    let config = config::CliConfig::load(&std::env::current_dir()?)?;
    let snapshot_flag = cli.snapshot.as_deref();

    match &cli.command {
        Commands::Tree(args) => cmd::tree::run(args, snapshot_flag, &config, mode),
        Commands::Active(args) => cmd::active::run(args, snapshot_flag, &config, mode),
        Commands::History(args) => cmd::history::run(args, snapshot_flag, &config, mode),
        Commands::Descendants(args) => {
            cmd::descendants::run(args, snapshot_flag, &config, mode)
        }
        Commands::CheckMove(args) => cmd::check_move::run(args, snapshot_flag, &config, mode),
        Commands::Export(args) => cmd::export::run(args, snapshot_flag, &config, mode),
    }
}
