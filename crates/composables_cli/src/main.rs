//! Composables CLI
//!
//! Check widget configuration files and replay gestures against sheets and
//! sliders without a UI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod simulate;

use check::Severity;
use composables_widgets::WidgetsConfig;
use simulate::{SheetScenario, SliderScenario};

const DEFAULT_CONFIG: &str = "widgets.toml";

#[derive(Parser)]
#[command(name = "composables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Widget configuration and gesture simulation tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a widget configuration file with every default spelled out
    Init {
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Check a widget configuration file for unusable settings
    Check {
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a sheet, drag it and release it
    Sheet {
        /// Widget configuration file, defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Measured height of the sheet content
        #[arg(long, default_value = "600")]
        sheet_height: f32,

        /// Height of the container the sheet slides over
        #[arg(long, default_value = "800")]
        container_height: f32,

        /// Pixels to drag after opening, positive towards hidden
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        drag: f32,

        /// Release velocity in pixels per second
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        velocity: f32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Press a slider track and drag its thumb
    Slider {
        /// Widget configuration file, defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Total width of the slider
        #[arg(long, default_value = "300")]
        width: f32,

        /// Width of the thumb
        #[arg(long, default_value = "20")]
        thumb_width: f32,

        /// Press position from the start edge
        #[arg(short, long, default_value = "0")]
        press: f32,

        /// Pixels to drag after the press
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        drag: f32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug,composables_anchored=trace")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),

        Commands::Check { path, json } => cmd_check(&path, json),

        Commands::Sheet {
            config,
            sheet_height,
            container_height,
            drag,
            velocity,
            json,
        } => cmd_sheet(
            config.as_deref(),
            SheetScenario {
                sheet_height,
                container_height,
                drag,
                velocity,
            },
            json,
        ),

        Commands::Slider {
            config,
            width,
            thumb_width,
            press,
            drag,
            json,
        } => cmd_slider(
            config.as_deref(),
            SliderScenario {
                width,
                thumb_width,
                press,
                drag,
            },
            json,
        ),
    }
}

fn load_config(path: Option<&Path>) -> Result<WidgetsConfig> {
    match path {
        Some(path) => WidgetsConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(WidgetsConfig::default()),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }

    WidgetsConfig::default().save(path)?;
    info!("Wrote default widget configuration to {}", path.display());
    Ok(())
}

fn cmd_check(path: &Path, json: bool) -> Result<()> {
    let config = load_config(Some(path))?;
    let issues = check::validate(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        info!("{} looks good", path.display());
    } else {
        for issue in &issues {
            match issue.severity {
                Severity::Warning => warn!("{}: {}", issue.field, issue.message),
                Severity::Error => tracing::error!("{}: {}", issue.field, issue.message),
            }
        }
    }

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("{} has {} error(s)", path.display(), errors);
    }
    Ok(())
}

fn cmd_sheet(config: Option<&Path>, scenario: SheetScenario, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let report = runtime()?.block_on(simulate::simulate_sheet(config.sheet, scenario))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:<8} {:<20} {:>8} {:>9}", "step", "value", "offset", "progress");
    for step in &report.steps {
        let offset = step
            .offset
            .map_or_else(|| "-".to_string(), |offset| format!("{offset:.1}"));
        println!(
            "{:<8} {:<20} {:>8} {:>9.3}",
            step.action,
            format!("{:?}", step.value),
            offset,
            step.progress
        );
    }
    if report.dismissed {
        println!();
        println!("Sheet was dismissed");
    }
    Ok(())
}

fn cmd_slider(config: Option<&Path>, scenario: SliderScenario, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let report = runtime()?.block_on(simulate::simulate_slider(&config.slider, scenario));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Value after press: {}", report.pressed_value);
    println!("Value after drag:  {}", report.value);
    println!("Fraction:          {:.3}", report.fraction);
    Ok(())
}
