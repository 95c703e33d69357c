#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::content::PROFILE;
use portfolio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Site configuration, set once from the command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Eras Tanveel Khan - Portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page graphic design portfolio")]
struct Args {
    /// Directory for the contact outbox (default: platform data dir)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Write contact submissions to this JSONL file instead
    #[arg(short, long)]
    outbox: Option<PathBuf>,

    /// Only log contact submissions, keep no outbox file
    #[arg(long, conflicts_with = "outbox")]
    no_outbox: bool,

    /// Resume document offered by "Download Resume"
    #[arg(short, long)]
    resume: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<SiteConfig> {
        let mut config = SiteConfig::default();

        if !self.no_outbox {
            let outbox = match self.outbox {
                Some(path) => path,
                None => self
                    .data_dir
                    .unwrap_or_else(|| {
                        dirs::data_dir()
                            .unwrap_or_else(|| PathBuf::from("."))
                            .join("portfolio")
                    })
                    .join("outbox.jsonl"),
            };
            config = config.with_outbox(outbox);
        }

        if let Some(resume) = self.resume {
            anyhow::ensure!(resume.is_file(), "resume not found: {}", resume.display());
            config = config.with_resume(resume);
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;

    tracing::info!(
        outbox = ?config.outbox,
        resume = ?config.resume,
        "Starting portfolio"
    );

    // Store configuration globally
    let _ = SITE_CONFIG.set(config);

    let title = format!("{} - {}", PROFILE.name, PROFILE.headline);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_site_config_falls_back_to_default() {
        let config = get_site_config();
        assert_eq!(config.reset_delay, portfolio_core::SUBMITTED_RESET_DELAY);
        assert!(config.outbox.is_none());
    }

    #[test]
    fn no_outbox_keeps_delivery_log_only() {
        let args = Args::parse_from(["portfolio-desktop", "--no-outbox"]);
        let config = args.into_config().unwrap();
        assert!(config.outbox.is_none());
        assert!(config.resume.is_none());
    }

    #[test]
    fn explicit_outbox_wins_over_data_dir() {
        let args = Args::parse_from([
            "portfolio-desktop",
            "--data-dir",
            "/tmp/site",
            "--outbox",
            "/tmp/mail.jsonl",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.outbox, Some(PathBuf::from("/tmp/mail.jsonl")));
    }
}
