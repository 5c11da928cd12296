//! Interactive demo: every input line is probed against a two-queue cache.
//!
//! Run with: cargo run --bin lrufreq --features cli -- --capacity 3
//! Set `RUST_LOG=lrufreq=trace` to watch promotions, demotions and forgets.

use std::hash::{Hash, Hasher};
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rustc_hash::FxHasher;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lrufreq::builder::CacheBuilder;
use lrufreq::policy::two_queue::TwoQueueCache;
use lrufreq::traits::{Probe, ProbeCache};

#[derive(Parser, Debug)]
#[command(name = "lrufreq")]
#[command(about = "Probe lines of text against a two-queue cache", long_about = None)]
struct Args {
    /// Keys each queue may hold
    #[arg(short, long, default_value_t = 2)]
    capacity: usize,

    /// Input line that ends the session (case-insensitive)
    #[arg(short, long, default_value = "q")]
    quit_word: String,
}

/// Derives the cache key for an input line.
fn key_for(line: &str) -> u64 {
    let mut hasher = FxHasher::default();
    line.hash(&mut hasher);
    hasher.finish()
}

fn run<R: BufRead, W: Write>(
    cache: &mut TwoQueueCache<u64, String>,
    quit_word: &str,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Enter a line ('{}' to quit):", quit_word)?;
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().eq_ignore_ascii_case(quit_word) {
            break;
        }

        let key = key_for(&line);
        match cache.lookup_or_put(key, || line.clone())? {
            Probe::Hit => writeln!(out, "hit: {}", cache.fetch(&key)?)?,
            Probe::Miss => writeln!(out, "miss (added)")?,
        }
        debug!(
            key,
            admission = cache.admission_len(),
            protected = cache.protected_len(),
            "probed"
        );
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut cache = CacheBuilder::new(args.capacity)
        .build::<u64, String>()
        .context("invalid cache configuration")?;
    info!(capacity = args.capacity, "cache ready");

    let stdin = io::stdin();
    run(&mut cache, &args.quit_word, stdin.lock(), io::stdout().lock())?;
    info!(resident = cache.len(), "session finished");
    Ok(())
}
