//! iZiwei CLI - Chart reports from the terminal
//!
//! Renders reports locally from an exported chart bundle, or asks a running
//! iZiwei server to do it.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Datelike, Local, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use iziwei::{
    error_line, ten_god, transformation_targets, ChartBundle, Gender, PrecomputedChartProvider,
    ReportService, Stem,
};

use api::{IziweiClient, ReportRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "iziwei")]
#[command(about = "iZiwei CLI - Eight-Character and Zi Wei chart reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report from a chart bundle (JSON)
    Report {
        /// Path to the chart bundle exported by the calendar library
        bundle: PathBuf,
        /// Civil birth moment, e.g. 1990-05-17T08:30
        #[arg(short, long)]
        birth: String,
        /// Gender (男/女, male/female); defaults to the configured one
        #[arg(short, long)]
        gender: Option<String>,
        /// Current lunar year (defaults to this calendar year)
        #[arg(short = 'y', long)]
        today_year: Option<i32>,
        /// Print the structured analysis as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also save the text report to the output directory
        #[arg(short, long)]
        save: bool,
        /// Generate on the configured server instead of locally
        #[arg(short, long)]
        remote: bool,
    },

    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show configuration (and update it with the given flags)
    Config {
        /// Default gender for reports
        #[arg(long)]
        gender: Option<String>,
        /// Directory for saved reports
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Server base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print the Sihua targets and Ten-God row of a stem
    Tables {
        /// Heavenly stem (甲..癸 or pinyin)
        stem: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout is clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { bundle, birth, gender, today_year, json, save, remote } => {
            cmd_report(bundle, birth, gender, today_year, json, save, remote).await
        }
        Commands::Login { key } => cmd_login(key).await,
        Commands::Config { gender, output_dir, base_url } => {
            cmd_config(gender, output_dir, base_url)
        }
        Commands::Tables { stem } => cmd_tables(&stem),
    }
}

// ============================================
// Command Implementations
// ============================================

fn parse_gender(value: Option<&str>, config: &Config) -> Result<Gender> {
    match value {
        Some(g) => g.parse().map_err(anyhow::Error::msg),
        None => Ok(config.default_gender),
    }
}

fn today_year(requested: Option<i32>) -> i32 {
    requested.unwrap_or_else(|| {
        let year = Local::now().year();
        tracing::warn!("No --today-year given, using calendar year {}", year);
        year
    })
}

/// File name for a saved report, e.g. iZiwei-Report-2026-10-14T08-30-00.txt
fn report_file_name(now: DateTime<Utc>) -> String {
    format!("iZiwei-Report-{}.txt", now.format("%Y-%m-%dT%H-%M-%S"))
}

fn save_report(dir: &Path, report: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;
    let path = dir.join(report_file_name(Utc::now()));
    fs::write(&path, report).with_context(|| format!("Failed to write report to {:?}", path))?;
    Ok(path)
}

async fn cmd_report(
    bundle_path: PathBuf,
    birth: String,
    gender: Option<String>,
    today: Option<i32>,
    json: bool,
    save: bool,
    remote: bool,
) -> Result<()> {
    let config = Config::load()?;
    let gender = parse_gender(gender.as_deref(), &config)?;
    let today = today_year(today);

    let content = fs::read_to_string(&bundle_path)
        .with_context(|| format!("Failed to read chart bundle: {:?}", bundle_path))?;

    let (report, analysis) = if remote {
        let bundle: ChartBundle =
            serde_json::from_str(&content).context("Failed to parse chart bundle")?;
        let client = IziweiClient::new(&config.base_url, config.api_key.as_deref());
        let request = ReportRequest {
            birth: &birth,
            gender,
            today_lunar_year: today,
            chart: &bundle,
        };

        if json {
            (None, Some(client.analysis(&request).await?))
        } else {
            (Some(client.report(&request).await?), None)
        }
    } else {
        let result = PrecomputedChartProvider::from_json(&content).and_then(|provider| {
            let service = ReportService::new(Arc::new(provider));
            if json {
                let analysis = service.analyze(&birth, gender, today)?;
                Ok((None, Some(serde_json::to_value(&analysis)?)))
            } else {
                Ok((Some(service.try_generate(&birth, gender, today)?), None))
            }
        });

        match result {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Report generation failed: {}", e);
                println!("{}", error_line(&e));
                std::process::exit(1);
            }
        }
    };

    if let Some(analysis) = analysis {
        let text = serde_json::to_string_pretty(&analysis).context("Failed to format analysis")?;
        println!("{}", text);
    }

    if let Some(report) = report {
        print!("{}", report);

        if save {
            let path = save_report(&config.report_dir(), &report)?;
            eprintln!("{} Report saved to {:?}", "✓".green(), path);
        }
    } else if save {
        eprintln!("{}", "--save only applies to text reports, skipped".yellow());
    }

    Ok(())
}

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = IziweiClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to iZiwei API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config(
    gender: Option<String>,
    output_dir: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;
    let changed = gender.is_some() || output_dir.is_some() || base_url.is_some();

    if let Some(g) = gender {
        config.default_gender = g.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(dir) = output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(url) = base_url {
        config.base_url = url;
    }

    if changed {
        config.save()?;
        println!("{} Configuration updated", "✓".green());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );
    println!("  Default Gender: {}", config.default_gender.to_string().cyan());
    println!("  Output Dir: {:?}", config.report_dir());

    Ok(())
}

fn cmd_tables(stem: &str) -> Result<()> {
    let stem: Stem = stem.parse().map_err(anyhow::Error::msg)?;
    let targets = transformation_targets(stem);

    println!("{} {}", "Stem".bold(), stem.to_string().cyan());

    println!("{}", "Sihua:".bold());
    for (kind, star) in targets.pairs() {
        println!("  {} {}", kind.to_string().yellow(), star);
    }

    println!("{}", "Ten Gods:".bold());
    for target in Stem::ALL {
        println!("  {} {}", target, ten_god(stem, target));
    }

    Ok(())
}
