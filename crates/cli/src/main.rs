//! Wordplay CLI — respell lines of text with sound-alike dictionary words.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordplay_core::{PhoneticIndex, Wordplay, WordplayConfig};

#[derive(Parser, Debug)]
#[command(
    name = "wordplay",
    about = "Algorithmic wordplay: sound-alike respellings of text",
    version,
)]
struct Cli {
    /// CMU pronouncing dictionary path
    #[arg(short, long, env = "WORDPLAY_DICT")]
    dict: PathBuf,

    /// Phoneme class table ("PHONEME CLASS" rows) [default: built-in ARPABET classes]
    #[arg(short, long, env = "WORDPLAY_PHONES")]
    phones: Option<PathBuf>,

    /// Read lines from stdin until EOF instead of prompting
    #[arg(short = 's', long, default_value_t = false)]
    use_stdin: bool,

    /// Attempts per line before giving up
    #[arg(long, default_value_t = 100)]
    tries: usize,

    /// Stop decoding after this many candidate respellings
    #[arg(long)]
    max_candidates: Option<usize>,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print each result as a JSON line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Text to transform once; reads lines when omitted
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::debug!("{:?}", cli);

    log::info!("Loading cmudict...");
    let index = PhoneticIndex::load(&cli.dict, cli.phones.as_deref())
        .with_context(|| format!("Failed to load dictionary {}", cli.dict.display()))?;

    let config = WordplayConfig {
        max_attempts: cli.tries,
        max_candidates: cli.max_candidates,
        ..WordplayConfig::default()
    };
    let wordplay = Wordplay::new(index, config);
    log::info!(
        "Loaded {} words ({} pronunciations), {} phoneme classes",
        wordplay.index().word_count(),
        wordplay.index().pronunciation_count(),
        wordplay.index().class_count(),
    );
    log::debug!("{:?}", wordplay.config());

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        let line = cli.text.join(" ");
        emit(&wordplay, &line, cli.json, &mut rng, &mut out)?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if !cli.use_stdin {
            write!(out, "> ")?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }
        let trimmed = line.trim();
        if !cli.use_stdin && trimmed.is_empty() {
            break;
        }
        emit(&wordplay, trimmed, cli.json, &mut rng, &mut out)?;
    }

    Ok(())
}

/// Transform one line and print it if anything came out.
fn emit(
    wordplay: &Wordplay,
    line: &str,
    json: bool,
    rng: &mut StdRng,
    out: &mut impl Write,
) -> Result<()> {
    match wordplay.play(line, rng) {
        Some(result) if json => writeln!(out, "{}", result.to_json_value())?,
        Some(result) => writeln!(out, "{}", result.text)?,
        None => log::debug!("No wordplay for {:?}", line),
    }
    out.flush()?;
    Ok(())
}
