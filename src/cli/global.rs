use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Extra settings file, layered over the built-in and user settings
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Suppress warnings (errors are still reported)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log codec decisions to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited, default from settings)
    #[arg(long, global = true)]
    pub max_size: Option<usize>,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
