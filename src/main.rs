// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use fretgen::{ChordDefinition, ChordEngine, ChordFingering, EngineConfig};

#[derive(Parser)]
#[command(name = "fretgen", about = "Playable guitar chord fingerings from chord names")]
#[command(version)]
struct Cli {
    /// Chord names, e.g. Am, F#m7, Bb7sus4
    #[arg(required = true)]
    chords: Vec<String>,

    /// Fingerings to show per chord
    #[arg(short = 'n', long = "max")]
    max: Option<usize>,

    /// Engine config file (.yaml, .yml or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only report whether each chord name is recognized
    #[arg(long)]
    check: bool,

    /// Print chord definitions as YAML
    #[arg(long, conflicts_with = "check")]
    yaml: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every chord produced a definition
fn run(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = ChordEngine::from_config(&config)?;
    let max = cli.max.unwrap_or(engine.max_voicings());

    let mut all_found = true;
    let mut definitions = Vec::new();

    for name in &cli.chords {
        if cli.check {
            let ok = engine.can_generate(name);
            println!("{}: {}", name, if ok { "ok" } else { "unknown chord" });
            all_found &= ok;
            continue;
        }

        match engine.generate(name, max) {
            Some(definition) => definitions.push(definition),
            None => {
                eprintln!("{}: no voicing", name);
                all_found = false;
            }
        }
    }

    if cli.yaml {
        let yaml = serde_yaml::to_string(&definitions).context("Failed to serialize chords")?;
        print!("{}", yaml);
    } else {
        for (i, definition) in definitions.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_definition(definition);
        }
    }

    Ok(all_found)
}

fn print_definition(definition: &ChordDefinition) {
    let notes: Vec<String> = definition.notes.iter().map(|n| n.to_string()).collect();
    println!(
        "{} ({}): {}",
        definition.name,
        definition.quality,
        notes.join(" ")
    );
    for (i, fingering) in definition.fingerings.iter().enumerate() {
        println!("  {}. {}", i + 1, describe(fingering));
    }
}

fn describe(fingering: &ChordFingering) -> String {
    let mut line = format!(
        "{:<18} score {:>3}  {}",
        fingering.to_string(),
        fingering.score,
        fingering.difficulty
    );
    if let Some(base) = fingering.base_fret {
        line.push_str(&format!("  fret {}", base));
    }
    for barre in &fingering.barres {
        line.push_str(&format!(
            "  barre {} ({}-{})",
            barre.fret, barre.from_string, barre.to_string
        ));
    }
    line
}
