//! TTS Studio is a command-line front end for cloud text-to-speech services,
//! with voice catalog caching, language and voice selection, and MP3 output.

// We'll silence Clippy on this one because of tracing macro
#![allow(clippy::unit_arg)]
#![warn(missing_docs)]
// Backends are used from a single-threaded runtime, so futures don't have to be Send
#![allow(async_fn_in_trait)]

use std::{convert::TryFrom, io::stderr};

use anyhow::{bail, Result};
use argh::from_env;
use catalog::{CatalogStore, VoiceCatalogCache};
use commands::execute;
use config::{Cli, Config};
use once_cell::sync::OnceCell;
use service::SpeechBackend;
use studio::Studio;
use tokio::{
    io::{stdin, stdout, BufReader},
    runtime,
};
use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[cfg(feature = "gctts")]
use {config::SpeechDriver, gctts::driver::GoogleCloudTextToSpeech, service::from_config::FromConfig};

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Application configuration and CLI.
pub mod config;

/// Voice records and catalogs.
pub mod voice;

/// Voice catalog cache.
mod catalog;

/// Language and voice selection.
mod selection;

/// Text-to-speech interfaces.
mod synthesis;

/// Errors, that terminate user actions.
mod error;

/// Speech backend abstraction.
mod service;

/// Google-specific generated structs and keys
#[cfg(feature = "gctts")]
pub mod google;

/// Google Cloud Text-to-Speech module
#[cfg(feature = "gctts")]
mod gctts;

/// User session state.
mod studio;

/// Interactive session.
mod prompt;

/// CLI command execution.
mod commands;

fn main() -> Result<()> {
    let cli: Cli = from_env();
    CONFIG.set(Config::try_from(&cli)?).ok();

    let config = CONFIG.get().expect("Config was not set previously");

    // All user actions are sequential, so a single thread is enough.
    let runtime = runtime::Builder::new_current_thread().enable_all().build()?;

    runtime.block_on(run(&cli, config))
}

async fn run(cli: &Cli, config: &'static Config) -> Result<()> {
    set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_env("LOG_LEVEL"))
            .with_writer(stderr)
            .finish(),
    )?;

    match config.driver() {
        #[cfg(feature = "gctts")]
        Some(SpeechDriver::GoogleCloudTextToSpeech) => {
            let backend = GoogleCloudTextToSpeech::from_config(config).await?;

            run_with_backend(cli, config, backend).await
        }
        #[cfg(not(feature = "gctts"))]
        Some(_) => bail!("Configured speech driver is not supported by this build"),
        None => bail!("No speech driver configured"),
    }
}

async fn run_with_backend<B>(cli: &Cli, config: &Config, backend: B) -> Result<()>
where
    B: SpeechBackend,
{
    let mut cache = VoiceCatalogCache::new(config.catalog_ttl());

    if let Some(path) = config.catalog_store() {
        cache = cache.with_store(CatalogStore::new(path.clone()));
    }

    let mut studio = Studio::new(backend, cache);

    execute(
        &cli.command,
        config,
        &mut studio,
        BufReader::new(stdin()),
        &mut stdout(),
    )
    .await?;

    Ok(())
}
