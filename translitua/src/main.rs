use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use translitua::{all_schemes, transliterate, transliterate_bytes, SchemeId, TranslitConfig};
use tracing_subscriber::EnvFilter;

/// Romanize Ukrainian and Russian Cyrillic text.
#[derive(Parser, Debug)]
#[command(name = "translit", version, about)]
struct Args {
    /// Text to transliterate. Reads stdin line by line when omitted.
    text: Vec<String>,

    /// Scheme name, e.g. UkrainianKMU or RussianICAO (see --list)
    #[arg(short, long)]
    scheme: Option<String>,

    /// Keep the case produced by the tables even for all-uppercase input
    #[arg(long)]
    no_preserve_case: bool,

    /// List every available scheme and exit
    #[arg(short, long)]
    list: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.list {
        for id in all_schemes() {
            println!("{:<42} {:<10} {}", id.name(), id.language(), id.description());
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => TranslitConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TranslitConfig::default(),
    };
    if let Some(scheme) = args.scheme {
        config.scheme = scheme;
    }
    if args.no_preserve_case {
        config.preserve_case = false;
    }

    let scheme: SchemeId = config.scheme.parse().context("run with --list to see valid names")?;
    tracing::debug!(scheme = %scheme, preserve_case = config.preserve_case, "selected scheme");

    if !args.text.is_empty() {
        println!("{}", transliterate(&args.text.join(" "), scheme, config.preserve_case));
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in stdin.lock().split(b'\n').enumerate() {
        let mut bytes = line.context("failed to read stdin")?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let converted = transliterate_bytes(&bytes, scheme, config.preserve_case)
            .with_context(|| format!("line {}", index + 1))?;
        writeln!(out, "{converted}")?;
    }
    Ok(())
}
