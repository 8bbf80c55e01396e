use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use phash_core::decode::fetch_and_decode_with;
use phash_core::{logging, phash, phash_from_file, Config, PHash};

#[derive(Parser)]
#[command(name = "phash")]
#[command(about = "Compute 64-bit perceptual image hashes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one or more images (file paths or http(s) URLs)
    Hash {
        /// Images to hash
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Emit results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Compare two images and print their Hamming distance
    Compare {
        /// First image (path or URL)
        a: String,

        /// Second image (path or URL)
        b: String,

        /// Distance at or below which the images count as similar
        #[arg(long)]
        threshold: Option<u32>,
    },
}

#[derive(Serialize)]
struct HashRecord {
    input: String,
    hash: String,
}

fn main() -> anyhow::Result<()> {
    logging::init_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Hash { inputs, json } => hash_command(inputs, json),
        Commands::Compare { a, b, threshold } => compare_command(&a, &b, threshold),
    }
}

fn hash_command(inputs: Vec<String>, json: bool) -> anyhow::Result<()> {
    debug!("hashing {} input(s)", inputs.len());

    // Each hash is independent; fan the inputs out across the thread pool.
    let results: Vec<(String, anyhow::Result<PHash>)> = inputs
        .into_par_iter()
        .map(|input| {
            let hash = hash_input(&input);
            (input, hash)
        })
        .collect();

    let mut records = Vec::new();
    let mut failed = false;
    for (input, result) in results {
        match result {
            Ok(hash) if json => records.push(HashRecord {
                input,
                hash: hash.to_string(),
            }),
            Ok(hash) => println!("{hash}  {input}"),
            Err(e) => {
                failed = true;
                eprintln!("error: {input}: {e:#}");
            }
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }
    if failed {
        bail!("one or more inputs failed");
    }
    Ok(())
}

fn compare_command(a: &str, b: &str, threshold: Option<u32>) -> anyhow::Result<()> {
    let threshold = threshold.unwrap_or_else(|| Config::default().similarity_threshold);

    let hash_a = hash_input(a)?;
    let hash_b = hash_input(b)?;
    let distance = hash_a.distance(&hash_b);
    println!("{distance}");

    if distance > threshold {
        std::process::exit(1);
    }
    Ok(())
}

/// Hash a local file or a remote URL.
fn hash_input(input: &str) -> anyhow::Result<PHash> {
    if input.starts_with("http://") || input.starts_with("https://") {
        let (img, _) = fetch_and_decode_with(input, &Config::default())
            .with_context(|| format!("fetching {input}"))?;
        Ok(phash(&img))
    } else {
        phash_from_file(input).with_context(|| format!("hashing {input}"))
    }
}
