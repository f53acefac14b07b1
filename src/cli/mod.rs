mod args;
mod commands;
mod config;
mod global;
mod handlers;

use args::{ConfigAction, DecodeArgs, DetectArgs, EncodeArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sigilwire")]
#[command(version)]
#[command(about = "Reversible text-to-emoji encoder with nibble (16-symbol) and base64 (64-symbol) alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to an emoji stream
    Encode(EncodeArgs),

    /// Decode an emoji stream back to text
    Decode(DecodeArgs),

    /// Detect which scheme produced an emoji stream
    Detect(DetectArgs),

    /// Show settings or symbol tables
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let color = use_color(&cli.global);
    sigilwire::set_color(color);
    init_tracing(&cli.global, color);

    let settings = config::load_settings(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Detect(args) => handlers::detect::handle(args, &cli.global, &settings),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &settings),
    }
}

/// Colour only for a terminal stderr, unless `--no-color` or `NO_COLOR` is set.
fn use_color(global: &GlobalArgs) -> bool {
    !global.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Logs go to stderr so stdout only ever carries the payload.
fn init_tracing(global: &GlobalArgs, color: bool) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color)
        .init();
}
