//! Doccards - navigation cards for documentation sites
//!
//! Prints the card grid or the navigation outline of a docs sidebar.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doccards::core::config::AppConfig;
use doccards::ui::{card_list::CardListPanel, sidebar::Sidebar};
use doccards::CardsApp;

#[derive(Parser, Debug)]
#[command(name = "doccards", version, about = "Navigation cards for documentation sites")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Locale for item counts, overrides the configured one
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cards of the top level or of a category
    Cards {
        #[command(flatten)]
        source: SourceArgs,

        /// Category path such as `AWS/VPC`
        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the navigation tree
    Tree {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the effective configuration
    Config {
        /// Write the defaults to the config path
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Sidebar JSON file
    #[arg(long)]
    sidebar: Option<PathBuf>,

    /// Docs directory to scan for pages
    #[arg(long)]
    docs: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {:#}", e);
            AppConfig::default()
        }),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Cards {
            source,
            category,
            format,
        } => {
            let app = open_app(with_locale(config, cli.locale), &source)?;
            let cards = app.cards(category.as_deref())?;
            match format {
                Format::Text => CardListPanel::show(&mut out, &cards)?,
                Format::Json => CardListPanel::show_json(&mut out, &cards)?,
            }
        }
        Command::Tree { source } => {
            let app = open_app(with_locale(config, cli.locale), &source)?;
            Sidebar::show(&mut out, &app.items)?;
        }
        Command::Config { init } => {
            let init_path = match (init, cli.config) {
                (false, _) => None,
                (true, Some(path)) => Some(path),
                (true, None) => Some(
                    AppConfig::config_path().context("Could not determine config directory")?,
                ),
            };
            let config = effective_config(config, init_path.as_deref(), cli.locale)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so card output can be piped
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(level)
        .init();
}

/// Apply a one-off `--locale` on top of the loaded config
fn with_locale(mut config: AppConfig, locale: Option<String>) -> AppConfig {
    if let Some(locale) = locale {
        config.site.locale = locale;
    }
    config
}

/// Write `config` to `init_path` as loaded, then return it with the locale override applied
fn effective_config(
    config: AppConfig,
    init_path: Option<&Path>,
    locale: Option<String>,
) -> Result<AppConfig> {
    if let Some(path) = init_path {
        config.save_to(path)?;
    }
    Ok(with_locale(config, locale))
}

fn open_app(config: AppConfig, source: &SourceArgs) -> Result<CardsApp> {
    let docs = source.docs.clone().or_else(|| config.site.docs_dir.clone());
    if docs.is_none() && source.sidebar.is_none() {
        anyhow::bail!("Pass --sidebar or --docs, or set site.docs_dir in the config");
    }

    let mut app = CardsApp::new(config);
    if let Some(ref docs) = docs {
        app.open_docs(docs)?;
    }
    if let Some(ref sidebar) = source.sidebar {
        app.open_sidebar(sidebar)?;
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_does_not_persist_locale_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let effective =
            effective_config(AppConfig::default(), Some(&path), Some("xx".to_string())).unwrap();
        assert_eq!(effective.site.locale, "xx");

        let saved = AppConfig::load_from(&path).unwrap();
        assert_eq!(saved.site.locale, "en");
        assert_eq!(saved, AppConfig::default());
    }

    #[test]
    fn test_config_without_init_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let effective = effective_config(AppConfig::default(), None, None).unwrap();
        assert_eq!(effective, AppConfig::default());
        assert!(!path.exists());
    }
}
