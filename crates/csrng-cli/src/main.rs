//! CLI for csrng — unbiased random numbers from the OS generator or a file.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "csrng")]
#[command(about = "csrng — unbiased cryptographically secure random numbers")]
#[command(version = csrng_core::VERSION)]
struct Cli {
    /// Read entropy from this file or device instead of the OS generator
    #[arg(long, global = true)]
    source: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw integers uniformly from [0, range)
    Intn {
        /// Range to draw from; values are 0 to range-1
        #[arg(long, default_value = "256")]
        range: i64,

        /// How many numbers to draw
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Draw floats uniformly from [0.0, 1.0)
    Float64 {
        /// How many numbers to draw
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Draw integers with the given number of random low bits (0-64)
    Bits {
        /// Number of random bits
        bits: u32,

        /// How many numbers to draw
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Print a random permutation of 0..n
    Perm {
        /// Permutation length
        n: usize,
    },

    /// Print k distinct values drawn from 0..n
    Sample {
        /// Size of the range to draw from
        n: usize,

        /// Number of values; clamped to n
        k: usize,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let format = commands::parse_format(&cli.format);
    let mut source = commands::make_source(cli.source.as_deref());
    let src = source.as_mut();

    let result = match cli.command {
        Commands::Intn { range, count } => commands::draw::run_intn(src, range, count, format),
        Commands::Float64 { count } => commands::draw::run_float64(src, count, format),
        Commands::Bits { bits, count } => commands::draw::run_bits(src, bits, count, format),
        Commands::Perm { n } => commands::seq::run_perm(src, n, format),
        Commands::Sample { n, k } => commands::seq::run_sample(src, n, k, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
