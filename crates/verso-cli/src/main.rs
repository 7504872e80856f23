use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use console::style;
use std::process::ExitCode;

use verso_cli::commands::{completions, range, version};
use verso_cli::config::{self, OutputFormat, VersoConfig};
use verso_cli::output::Output;

#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(about = "Parse, compare and match semantic versions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format, overrides VERSO_FORMAT and verso.toml
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Force colored output
    #[arg(long, global = true, overrides_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, overrides_with = "color")]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of a version
    Parse(version::ParseArgs),

    /// Compare two versions, printing -1, 0 or 1
    Compare(version::CompareArgs),

    /// Print the release type separating two versions
    Diff(version::DiffArgs),

    /// Increment a version by a release type
    Inc(version::IncArgs),

    /// Sort versions by precedence
    Sort(version::SortArgs),

    /// Print the normalized form of a range
    Range(range::RangeArgs),

    /// Print the versions satisfying a range
    Satisfies(range::SatisfiesArgs),

    /// Print the highest version satisfying a range
    Max(range::ExtremumArgs),

    /// Print the lowest version satisfying a range
    Min(range::ExtremumArgs),

    /// Check if a version is outside of a range
    Outside(range::OutsideArgs),

    /// Check if two ranges overlap
    Intersects(range::IntersectsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Load verso.toml config if present
    let config = VersoConfig::load_from_cwd()?;

    let color = match (cli.color, cli.no_color) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let format_env = std::env::var(config::FORMAT_ENV).ok();
    let settings = config::resolve_output(config.as_ref(), cli.format, color, format_env.as_deref())?;
    log::debug!("Output settings: {:?}", settings);

    let output = Output::new(settings);

    match cli.command {
        Commands::Parse(args) => version::parse(args, &output),
        Commands::Compare(args) => version::compare_versions(args, &output),
        Commands::Diff(args) => version::diff(args, &output),
        Commands::Inc(args) => version::inc(args, &output),
        Commands::Sort(args) => version::sort(args, &output),
        Commands::Range(args) => range::range(args, &output),
        Commands::Satisfies(args) => range::satisfies(args, &output),
        Commands::Max(args) => range::max(args, &output),
        Commands::Min(args) => range::min(args, &output),
        Commands::Outside(args) => range::outside(args, &output),
        Commands::Intersects(args) => range::intersects(args, &output),
        Commands::Completions(args) => completions::execute(args, &mut Cli::command()),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
