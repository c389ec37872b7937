//! wordtest CLI — drill a vocabulary file from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "wordtest",
    version,
    about = "Priority-weighted vocabulary quiz"
)]
struct Cli {
    /// Runs `quiz` with defaults when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quiz yourself on a weighted sample of words
    Quiz {
        /// Vocabulary file (default: words.txt)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Words per round (default: 20)
        #[arg(long, short = 'n')]
        size: Option<usize>,

        /// Allow the same word more than once per round
        #[arg(long)]
        with_replacement: bool,

        /// Fixed RNG seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a vocabulary file for malformed and duplicate lines
    Validate {
        /// Vocabulary file (default: words.txt)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show priorities and sampling odds for every word
    Stats {
        /// Vocabulary file (default: words.txt)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = commands::stats::Format::Text)]
        format: commands::stats::Format,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and vocabulary file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordtest=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::quiz::execute(None, None, false, None, None),
        Some(Commands::Quiz {
            file,
            size,
            with_replacement,
            seed,
            config,
        }) => commands::quiz::execute(file, size, with_replacement, seed, config),
        Some(Commands::Validate { file, config }) => commands::validate::execute(file, config),
        Some(Commands::Stats {
            file,
            format,
            config,
        }) => commands::stats::execute(file, format, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
