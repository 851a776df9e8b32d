//! geez CLI: convert between Arabic and Ge'ez numerals.

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde_json::json;

use geez_numerals::batch::{self, Direction};
use geez_numerals::config::{ColorMode, GeezConfig};
use geez_numerals::glyph::{catalog, render};
use geez_numerals::{GeezError, decode, encode_str, validate};

/// Largest stack the `myriad` subcommand will describe.
const MAX_MYRIAD_POWER: i64 = 1024;

#[derive(Parser)]
#[command(name = "geez", version, about = "Ge'ez numeral converter")]
struct Cli {
    /// Path to a TOML config file (default: $XDG_CONFIG_HOME/geez/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to colour output; overrides the config file.
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an Arabic number to Ge'ez numerals.
    Encode {
        /// A positive whole number, e.g. 2021.
        number: String,
    },

    /// Convert Ge'ez numerals to an Arabic number.
    Decode {
        /// A Ge'ez numeral, e.g. ፳፻፳፩.
        numeral: String,
    },

    /// Check that a Ge'ez numeral is well formed.
    Validate {
        /// Candidate numeral.
        numeral: String,
    },

    /// Show every numeral glyph with its value.
    Table,

    /// Describe a stack of myriad glyphs.
    Myriad {
        /// Number of consecutive ፼ glyphs (1 to 1024).
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_MYRIAD_POWER))]
        power: u32,
    },

    /// Convert stdin line by line, one result per line.
    Batch {
        /// Treat input lines as Ge'ez and convert to Arabic.
        #[arg(long)]
        decode: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GeezConfig::resolve(cli.config.as_deref()).map_err(GeezError::from)?;
    if let Some(color) = cli.color {
        config.color = color;
    }
    let render_config = config.render_config();

    match cli.command {
        Commands::Encode { number } => {
            let numeral = encode_str(&number).map_err(GeezError::from)?;
            if cli.json {
                println!("{}", json!({ "input": number.trim(), "geez": numeral }));
            } else {
                println!("{}", render::render_numeral(&numeral, &render_config));
            }
        }

        Commands::Decode { numeral } => {
            let value = decode(&numeral).map_err(GeezError::from)?;
            if cli.json {
                println!(
                    "{}",
                    json!({ "input": numeral.trim(), "arabic": value.to_string() })
                );
            } else {
                println!("{}", render::render_value(&value, &render_config));
            }
        }

        Commands::Validate { numeral } => {
            let verdict = validate(&numeral);
            if cli.json {
                let error = verdict.as_ref().err().map(|e| e.to_string());
                println!(
                    "{}",
                    json!({ "input": numeral.trim(), "valid": verdict.is_ok(), "error": error })
                );
                if verdict.is_err() {
                    std::process::exit(1);
                }
            } else {
                verdict.map_err(GeezError::from)?;
                println!("valid");
            }
        }

        Commands::Table => {
            if cli.json {
                let rows: Vec<_> = catalog::all_numerals()
                    .iter()
                    .map(|n| {
                        json!({
                            "symbol": n.glyph.to_string(),
                            "value": n.value,
                            "class": n.class.to_string(),
                            "label": n.label,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
            } else {
                println!("{}", render::render_legend(&render_config));
            }
        }

        Commands::Myriad { power } => {
            let info = catalog::myriad_power_info(power);
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "power": info.power,
                        "value": info.value.to_string(),
                        "name": info.name,
                    })
                );
            } else {
                let glyphs = catalog::MYRIAD.to_string().repeat(power as usize);
                println!("{}", render::render_numeral(&glyphs, &render_config));
                println!("  name:  {}", info.name);
                println!("  value: {}", render::render_value(&info.value, &render_config));
            }
        }

        Commands::Batch { decode } => {
            let lines: Vec<String> = std::io::stdin()
                .lock()
                .lines()
                .collect::<std::io::Result<_>>()
                .into_diagnostic()?;
            let lines: Vec<&str> = lines
                .iter()
                .map(|l| l.as_str())
                .filter(|l| !l.trim().is_empty())
                .collect();
            let direction = if decode {
                Direction::ToArabic
            } else {
                Direction::ToGeez
            };

            let results = match config.batch_threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .into_diagnostic()?
                    .install(|| batch::convert_batch(&lines, direction)),
                None => batch::convert_batch(&lines, direction),
            };

            let mut failed = 0usize;
            for result in &results {
                if cli.json {
                    println!("{}", serde_json::to_string(result).into_diagnostic()?);
                } else {
                    match (&result.output, &result.error) {
                        (Some(output), _) => println!("{}\t{output}", result.input),
                        (None, Some(error)) => println!("{}\terror: {error}", result.input),
                        (None, None) => println!("{}", result.input),
                    }
                }
                if !result.is_ok() {
                    failed += 1;
                }
            }
            if failed > 0 {
                tracing::warn!(failed, total = results.len(), "some inputs failed to convert");
            }
        }
    }

    Ok(())
}
