//! CLI for randkit: random tokens, strings and integers from the shell.

mod commands;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "randkit")]
#[command(about = "randkit — random bytes, strings and integers over pluggable generators")]
#[command(version = randkit_core::VERSION)]
struct Cli {
    /// Log selection and rejection details (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Generator selection shared by every producing command.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Generator: os, urandom, thread, mock (default: best available)
    #[arg(long, value_parser = ["os", "urandom", "thread", "mock"])]
    generator: Option<String>,

    /// Seed for the mock generator (implies --generator mock; rejected with any other generator)
    #[arg(long)]
    mock_seed: Option<String>,

    /// Device read by the urandom generator
    #[arg(long)]
    device: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print N random bytes in encoded form
    Bytes {
        /// Number of random bytes
        length: usize,

        /// Encoder: raw, hex, base32, base64
        #[arg(long, default_value = "hex", value_parser = ["raw", "hex", "base32", "base64"])]
        encoder: String,

        /// Pad base32 output with '='
        #[arg(long)]
        pad: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print a random string of N characters
    #[command(name = "string")]
    Text {
        /// Number of characters
        length: usize,

        /// Characters to draw from (default: A-Z a-z 0-9 + /)
        #[arg(long)]
        charset: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print random integers in [MIN, MAX]
    Int {
        #[arg(allow_negative_numbers = true)]
        min: i64,

        #[arg(allow_negative_numbers = true)]
        max: i64,

        /// How many integers to print, one per line
        #[arg(long, default_value = "1")]
        count: usize,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List generators and whether each works on this machine
    Scan {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run statistical sanity checks against a generator
    Check {
        /// Bytes to sample for the bit and byte checks
        #[arg(long, default_value = "65536")]
        samples: usize,

        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bytes {
            length,
            encoder,
            pad,
            source,
        } => commands::bytes::run(&source, length, &encoder, pad),
        Commands::Text {
            length,
            charset,
            source,
        } => commands::string::run(&source, length, charset.as_deref()),
        Commands::Int {
            min,
            max,
            count,
            source,
        } => commands::int::run(&source, min, max, count),
        Commands::Scan { json } => commands::scan::run(json),
        Commands::Check { samples, source } => commands::check::run(&source, samples),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the default `warn` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
