mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, render::RenderArgs, tend::TendArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "garden-bot",
    about = "Grow a silly garden from repository activity: lawn state, story, and an SVG to match",
    version,
    propagate_version = true
)]
struct Cli {
    /// Garden root (default: auto-detect from lawn-health.json or .git/)
    #[arg(long, global = true, env = "GARDEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// React to a repository event: update the lawn and redraw the garden
    Tend(TendArgs),

    /// Redraw garden.svg and garden.md from the current lawn state
    Render(RenderArgs),

    /// Show the lawn state and its story
    Show,

    /// Print a plant haiku
    Haiku {
        /// Seed the random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Inspect and validate garden.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "garden root");

    let result = match cli.command {
        Commands::Tend(args) => cmd::tend::run(&root, args, cli.json),
        Commands::Render(args) => cmd::render::run(&root, args, cli.json),
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Haiku { seed } => cmd::haiku::run(seed, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
