#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use heartcard_core::CardConfig;

/// Global card config, resolved from command line and config file
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card config (resolved at startup or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Heart Card - an animated greeting card
#[derive(Parser, Debug)]
#[command(name = "heartcard-desktop")]
#[command(about = "Heart Card - tap the heart to open your message")]
struct Args {
    /// JSON config file with card copy and window settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the floating hearts (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default config location (<config dir>/heartcard/config.json)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("heartcard").join("config.json"))
}

/// Explicit --config wins; otherwise `default_path` is used when it exists,
/// and built-in defaults when it does not.
fn resolve_config(args: &Args, default_path: Option<PathBuf>) -> anyhow::Result<CardConfig> {
    let mut config = if let Some(ref path) = args.config {
        CardConfig::load(path).with_context(|| format!("loading config {:?}", path))?
    } else if let Some(path) = default_path.filter(|p| p.exists()) {
        CardConfig::load(&path).with_context(|| format!("loading config {:?}", path))?
    } else {
        tracing::debug!("No config file, using built-in card");
        CardConfig::default()
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = resolve_config(&args, default_config_path())?;

    tracing::info!(
        "Starting '{}' ({}x{}, seed: {:?})",
        config.window.title,
        config.window.width,
        config.window.height,
        config.seed
    );

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(true),
    );

    // Store config globally
    let _ = CARD_CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_flag_overrides_config() {
        let args = Args::parse_from(["heartcard-desktop", "--seed", "9"]);
        let config = resolve_config(&args, None).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.copy, CardConfig::default().copy);
    }

    #[test]
    fn absent_default_path_falls_back_to_defaults() {
        let args = Args::parse_from(["heartcard-desktop"]);
        let config =
            resolve_config(&args, Some(PathBuf::from("/nonexistent/heartcard/config.json")))
                .unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = Args::parse_from(["heartcard-desktop", "--config", "/nonexistent/card.json"]);
        assert!(resolve_config(&args, None).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::parse_from(["heartcard-desktop", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
