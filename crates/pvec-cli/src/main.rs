//! pvec - vector and color calculator
//!
//! Parses vectors and colors the way the pvec text readers do and prints
//! results in decimal and hex form.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pvec")]
#[command(author, version, about = "Vector and color calculator")]
#[command(long_about = "
Evaluates small vector expressions and parses color text.

Vectors are given as one argument with space-separated components, or as
the keyword null / zero. Colors additionally accept the names red, green,
blue, black, white, yellow, cyan, magenta and hex literals such as 0xFF0088.

Examples:
  pvec color red                       # 1 0 0 / 0x0000ff
  pvec color 0xFF0088 --bytes          # 255 0 136
  pvec color cyan --rgba --alpha 0.5   # 0 1 1 0.5
  pvec normalize '3 4' -n 2            # magnitude 5, 0.6 0.8
  pvec dot '1 2 3' '4 5 6'             # 32
  pvec cross '1 0 0' '0 1 0'           # 0 0 1
  pvec lerp '0 0 0' '10 20 30' 0.5     # 5 10 15
  pvec -vv color 0x102030              # with debug logging
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a color and print it in decimal and hex
    #[command(visible_alias = "c")]
    Color(ColorArgs),

    /// Print the magnitude and unit vector
    #[command(visible_alias = "norm")]
    Normalize(NormalizeArgs),

    /// Dot product of two vectors
    Dot(DotArgs),

    /// Cross product of two 3-component vectors
    Cross(CrossArgs),

    /// Linear interpolation between two vectors
    Lerp(LerpArgs),
}

/// Component count accepted by the vector commands.
fn dims_arg() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(2..=4)
}

#[derive(Args)]
struct ColorArgs {
    /// Color text: components, null/zero, a name or 0x hex
    text: String,

    /// Read 8-bit components (0-255) instead of floats (0-1)
    #[arg(short, long)]
    bytes: bool,

    /// Read four components (RGBA)
    #[arg(long)]
    rgba: bool,

    /// Alpha for names and short hex values (implies --rgba).
    /// Uses the component range: 0-1, or a whole 0-255 with --bytes
    #[arg(short, long)]
    alpha: Option<f64>,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Vector text, e.g. '3 4 0'
    vector: String,

    /// Component count (2-4)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = dims_arg())]
    dims: u8,
}

#[derive(Args)]
struct DotArgs {
    /// First vector
    a: String,

    /// Second vector
    b: String,

    /// Component count (2-4)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = dims_arg())]
    dims: u8,
}

#[derive(Args)]
struct CrossArgs {
    /// First vector
    a: String,

    /// Second vector
    b: String,
}

#[derive(Args)]
struct LerpArgs {
    /// Start vector
    a: String,

    /// End vector
    b: String,

    /// Interpolation amount (0 = a, 1 = b)
    #[arg(allow_negative_numbers = true)]
    t: f64,

    /// Component count (2-4)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = dims_arg())]
    dims: u8,
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Color(args) => commands::color::run(args),
        Commands::Normalize(args) => commands::vector::run_normalize(args),
        Commands::Dot(args) => commands::vector::run_dot(args),
        Commands::Cross(args) => commands::vector::run_cross(args),
        Commands::Lerp(args) => commands::vector::run_lerp(args),
    }
}
