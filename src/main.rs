//! Zenith Sentiment CLI
//!
//! Prints labeled sentiment scores for a text. Without a subcommand it runs
//! the built-in demonstration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use zenith_sentiment::sentiment::to_indented_json;
use zenith_sentiment::utils::{load_config, setup_logging};
use zenith_sentiment::{
    analyze_sentiment, AppConfig, Interpretation, LabelPreset, OutputFormat, DEMO_TEXT,
};

#[derive(Parser)]
#[command(name = "zenith-sentiment", version)]
#[command(about = "Labeled sentiment scores for a piece of text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (.json, .toml, .yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Label set for the four scores
    #[arg(long, value_enum, global = true)]
    labels: Option<LabelPreset>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the built-in example text
    Demo,

    /// Analyze a text given as argument, or read from stdin
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Append tone, bias signals, risk note and message power
        #[arg(short, long)]
        interpret: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    setup_logging(&config.logging.level)?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            info!("running demonstration");
            report(DEMO_TEXT, &config, false)
        }
        Commands::Analyze { text, interpret } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            report(&text, &config, interpret || config.output.interpret)
        }
    }
}

/// Defaults, then the config file, then command-line flags
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(preset) = cli.labels {
        config.labels.preset = preset;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading text from stdin")?;
    Ok(text)
}

fn report(text: &str, config: &AppConfig, interpret: bool) -> Result<()> {
    let result = analyze_sentiment(text)?;
    info!(compound = result.compound_score, "analysis complete");

    let labels = config.labels.resolve();
    let format = config.output.format;

    if !interpret {
        println!("{}", format.render(&labels, &result));
        return Ok(());
    }

    let interpretation = Interpretation::of(text, &result);
    match format {
        OutputFormat::Json => {
            let body = json!({
                "analysis": labels.to_json(&result),
                "interpretation": interpretation,
            });
            println!("{}", to_indented_json(&body));
        }
        OutputFormat::Text => {
            println!("{}", format.render(&labels, &result));
            println!();
            println!("{}", interpretation.summary());
        }
    }

    Ok(())
}
