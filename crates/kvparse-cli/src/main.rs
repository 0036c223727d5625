use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "kvparse",
    about = "Parse whitespace-separated key=value pairs and print them as JSON",
    version
)]
struct Args {
    /// Only accept keys given with --allow (implied by --allow)
    #[arg(long)]
    strict: bool,

    /// Permitted key; repeat or separate with commas
    #[arg(long = "allow", value_name = "KEY", value_delimiter = ',')]
    allow: Vec<String>,

    /// Compare keys against --allow ignoring case
    #[arg(long)]
    ignore_case: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let mut options = kvparse::Options {
        strict: args.strict || !args.allow.is_empty(),
        allowed_keys: args.allow,
        ..kvparse::Options::default()
    };
    if args.ignore_case {
        options = options.case_insensitive();
    }
    debug!(?options, "parsing input");

    // the line terminator of a file or pipe is not part of the input
    let input = buf.trim_end_matches(['\n', '\r']);
    let parsed = kvparse::parse_with_options(input, &options).context("failed to parse input")?;

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{}", serde_json::to_string(&parsed)?);
    }

    Ok(())
}
