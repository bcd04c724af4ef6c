#![deny(unsafe_code)]
//! CLI binary for shade-finder.
//!
//! Subcommands:
//! - `variations [INPUT]` — print the palette derived from a hex code or color name
//! - `convert <HEX>` — show a color as hex, RGB and HSV
//! - `names` — list the color names the lookup table knows

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use shade_finder_core::{lookup, rgb_to_hsv, NameTable, Rgb, Variation, DEFAULT_SEED};
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shade-finder",
    about = "Find similar shades and variations of a color"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive lighter, darker, hue-shifted and (de)saturated variations.
    Variations {
        /// A hex code like "#3498db" or a color name like "coral".
        #[arg(default_value = DEFAULT_SEED)]
        input: String,

        /// JSON color-name table (`[{"name": ..., "hex": ...}]`) used
        /// instead of the built-in CSS names.
        #[arg(long)]
        names: Option<PathBuf>,
    },
    /// Show a hex color as hex, RGB and HSV.
    Convert {
        /// A hex code, with or without the leading '#'.
        color: Rgb,
    },
    /// List the known color names.
    Names {
        /// JSON color-name table to list instead of the built-in CSS names.
        #[arg(long)]
        names: Option<PathBuf>,
    },
}

fn load_names(path: Option<&Path>) -> Result<NameTable, CliError> {
    match path {
        Some(path) => Ok(NameTable::from_path(path)?),
        None => Ok(NameTable::builtin()),
    }
}

/// Formats variations as aligned `label  hex` rows.
fn format_variations(variations: &[Variation]) -> String {
    variations
        .iter()
        .map(|v| format!("{:<16}{}\n", v.label, v.hex))
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Variations { input, names } => {
            let table = load_names(names.as_deref())?;
            let result = lookup(&input, &table);

            if result.variations.is_empty() {
                return Err(if result.name_not_recognized {
                    CliError::UnknownName(input)
                } else {
                    CliError::Incomplete(input)
                });
            }
            debug!(count = result.variations.len(), "generated variations");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", format_variations(&result.variations));
            }
        }
        Command::Convert { color } => {
            let hsv = rgb_to_hsv(color);
            if cli.json {
                let info = serde_json::json!({
                    "hex": color,
                    "rgb": { "r": color.r, "g": color.g, "b": color.b },
                    "hsv": hsv,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("hex  {color}");
                println!("rgb  {} {} {}", color.r, color.g, color.b);
                println!("hsv  {:.1}° {:.3} {:.3}", hsv.h, hsv.s, hsv.v);
            }
        }
        Command::Names { names } => {
            let table = load_names(names.as_deref())?;
            let list: Vec<&str> = table.names().collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for name in list {
                    println!("{name}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
