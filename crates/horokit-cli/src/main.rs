//! HoroKit CLI - Command-line interface for fetching horoscopes

use clap::{Parser, Subcommand, ValueEnum};
use horokit::{Horoscope, Sign, ALL_SIGNS};
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format for the predict subcommand
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Formatted message with a bold header
    #[default]
    Text,
    /// JSON object with sign, label, and message
    Json,
}

/// HoroKit - daily horoscope fetching tool
#[derive(Parser, Debug)]
#[command(name = "horokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch today's prediction for a sign
    Predict {
        /// Zodiac sign (lowercase English token, e.g. "aries")
        sign: String,

        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,

        /// Custom User-Agent
        #[arg(long)]
        user_agent: Option<String>,

        /// Override the upstream base URL
        #[arg(long, hide = true)]
        base_url: Option<String>,
    },
    /// List the twelve supported signs
    Signs,
}

/// JSON form of a fetched prediction
#[derive(Debug, Serialize)]
struct PredictionOutput {
    sign: Sign,
    label: &'static str,
    message: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Predict {
            sign,
            output,
            user_agent,
            base_url,
        }) => {
            run_predict(&sign, output, user_agent, base_url).await;
        }
        Some(Commands::Signs) => {
            print_signs();
        }
        None => {
            eprintln!("Usage: horokit predict <SIGN>");
            eprintln!("   or: horokit signs");
            eprintln!("   or: horokit --help");
            std::process::exit(1);
        }
    }
}

async fn run_predict(
    sign: &str,
    output: OutputFormat,
    user_agent: Option<String>,
    base_url: Option<String>,
) {
    let sign = Sign::from_str(sign).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run `horokit signs` for the supported tokens.");
        std::process::exit(1);
    });

    let mut builder = Horoscope::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    if let Some(base) = base_url {
        builder = builder.base_url(base);
    }
    let horoscope = builder.build();

    let message = horoscope.message(sign).await;

    match output {
        OutputFormat::Text => writeln_safe(&message),
        OutputFormat::Json => {
            let out = PredictionOutput {
                sign,
                label: sign.label(),
                message,
            };
            let json = serde_json::to_string_pretty(&out).unwrap_or_else(|e| {
                eprintln!("Error serializing output: {}", e);
                std::process::exit(1);
            });
            writeln_safe(&json);
        }
    }
}

fn print_signs() {
    for sign in ALL_SIGNS {
        writeln_safe(&format!("{:<12} {}", sign.as_str(), sign.label()));
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
