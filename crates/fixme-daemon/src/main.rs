//! `fixme`: watches the clipboard and replaces copied prose with a
//! grammar-corrected version.

mod cli;

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use fixme_core::config::FixMeConfig;
use fixme_core::traits::ICodeDetector;
use fixme_detect::CodeDetector;
use fixme_mask::UrlMasker;
use fixme_monitor::{
    ClipboardService, CommandClipboard, MemorySettingsStore, SettingsHandle, TickOutcome,
    TomlSettingsStore,
};
use fixme_rewrite::{ChatCompletionsClient, MaskedRewriter};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => FixMeConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FixMeConfig::default(),
    };
    if let Some(level) = &cli.log {
        config.observability.log_level = level.clone();
    }
    if cli.json_logs {
        config.observability.json = true;
    }
    fixme_observability::init_tracing(&config.observability);

    match cli.command.unwrap_or(Command::Run { once: false }) {
        Command::Run { once } => run(config, once).await,
        Command::Classify => {
            let report = CodeDetector::with_weights(config.detection).analyze(&read_stdin()?);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Mask => {
            let (masked, tracker) = UrlMasker::new().mask_with_tracking(&read_stdin()?);
            if let Some(err) = tracker.into_error() {
                return Err(err.into());
            }
            println!("{}", serde_json::to_string_pretty(&masked)?);
            Ok(())
        }
        Command::Set { setting, value } => {
            let handle = settings_handle(&config)?;
            handle.set(setting.into(), value)?;
            if config.monitor.settings_path.is_none() {
                warn!("no monitor.settings_path configured; the change is not persisted");
            }
            println!("{}", serde_json::to_string_pretty(&handle.snapshot())?);
            Ok(())
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

async fn run(config: FixMeConfig, once: bool) -> anyhow::Result<()> {
    let client = ChatCompletionsClient::new(config.rewrite.clone())?;
    if !client.has_api_key() {
        warn!("no API key configured; rewrites will fail until one is set");
    }
    let mut service = ClipboardService::new(
        MaskedRewriter::new(client),
        CommandClipboard::system(),
        settings_handle(&config)?,
    )
    .with_detector(CodeDetector::with_weights(config.detection))
    .with_poll_interval(Duration::from_millis(config.monitor.poll_interval_ms));

    let cancel = CancellationToken::new();

    if once {
        service.fix_now();
        let outcome = service.poll_once(&cancel).await?;
        info!(?outcome, "single pass finished");
        if outcome == TickOutcome::Failed {
            bail!("rewrite failed");
        }
        return Ok(());
    }

    service.prime().await?;
    let stopper = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, shutting down");
        }
        stopper.cancel();
    });
    service.run(cancel).await;
    Ok(())
}

fn settings_handle(config: &FixMeConfig) -> anyhow::Result<SettingsHandle> {
    match &config.monitor.settings_path {
        Some(path) => {
            let store = TomlSettingsStore::with_defaults(path, config.settings.clone());
            SettingsHandle::load(Arc::new(store))
                .with_context(|| format!("loading settings from {}", path.display()))
        }
        None => Ok(SettingsHandle::new(
            config.settings.clone(),
            Arc::new(MemorySettingsStore::new()),
        )),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}
