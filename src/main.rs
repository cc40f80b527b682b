// stardeck - a storytelling deck for the terminal
//
// Presents an ordered deck of sections as full-screen panels with animated
// slide transitions, an animated starfield background, and section
// navigation driven by keyboard, mouse wheel, drag gestures and clicks.
//
// Architecture:
// - Deck: section content, loaded from TOML or the built-in demo
// - SectionNavigator: state machine owning the current index, the
//   transition lock and the visited trail
// - TUI (ratatui): event loop, input adapters and rendering
// - Logging: tracing events captured to an in-memory buffer for the
//   logs modal, optionally mirrored to rotating files

mod cli;
mod config;
mod deck;
mod history;
mod logging;
mod nav;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, LogRotation};
use deck::{demo_deck, Deck};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing.
///
/// In TUI mode logs go to the in-memory buffer only - writing to stdout
/// would garble the alternate screen. In headless mode they go to stdout.
/// File logging is layered on top when enabled; the returned guard must
/// stay alive so buffered writes flush on exit.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("stardeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);

    let file_writer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                Some(tracing_appender::non_blocking(appender))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    // The file layer attaches before the mode branch so both arms see the
    // same subscriber type
    let registry = registry.with(file_layer);
    if config.enable_tui {
        registry.with(TuiLogLayer::new(log_buffer.clone())).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    guard
}

/// Headless mode: validate the deck and print its outline.
fn print_outline(deck: &Deck, start: Option<&str>) {
    println!("{}", deck.title);
    for (idx, section) in deck.sections.iter().enumerate() {
        let marker = if start == Some(section.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {}. #{} - {} ({} messages)",
            marker,
            idx + 1,
            section.id,
            section.title,
            section.messages.len()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands (config --show etc.) run and exit before anything else
    if cli::handle_subcommand(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if cli.headless {
        config.enable_tui = false;
    }

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    let deck = match &cli.deck {
        Some(path) => Deck::load(path)?,
        None => demo_deck(),
    };
    tracing::info!(
        "loaded deck '{}' with {} sections",
        deck.title,
        deck.len()
    );

    if let Some(section) = &cli.section {
        if deck.sections.iter().all(|s| &s.id != section) {
            eprintln!(
                "Warning: --section '{}' not found in deck, starting at the first section",
                section
            );
        }
    }

    if !config.enable_tui {
        print_outline(&deck, cli.section.as_deref());
        return Ok(());
    }

    let app = tui::App::new(deck, &config, cli.section.as_deref(), log_buffer)?;
    tui::run_tui(app).await
}
