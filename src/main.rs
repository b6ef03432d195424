//! pingmon - network probe monitoring daemon (ICMP/MTR/TCP).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use pingmon::cli::{Cli, LogFormat};
use pingmon::config::{CheckType, ConfigHolder};
use pingmon::error::ConfigError;
use pingmon::identity::SystemHostname;
use pingmon::watcher::ConfigWatcher;

/// Initialize the tracing subscriber with the specified log format.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    info!(config_path = %cli.config.display(), "Loading configuration");

    // Startup is fail-fast: no holder without an initial valid config.
    let holder = match ConfigHolder::load(&cli.config, Arc::new(SystemHostname)) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, path = %cli.config.display(), "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Validate mode: display success and exit
    if cli.validate {
        let config = holder.current();
        let count_of = |wanted: CheckType| {
            config
                .targets
                .iter()
                .filter(|t| t.check_type == wanted)
                .count()
        };
        println!("Configuration is valid: {}", cli.config.display());
        println!("  Refresh interval: {:?}", config.refresh);
        println!("  Targets selected for this host: {}", config.targets.len());
        println!(
            "  ICMP: {} / MTR: {} / ICMP+MTR: {} / TCP: {}",
            count_of(CheckType::Icmp),
            count_of(CheckType::Mtr),
            count_of(CheckType::IcmpAndMtr),
            count_of(CheckType::Tcp),
        );
        return Ok(());
    }

    info!(config_path = %cli.config.display(), "pingmon starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(holder, cli.config))
}

/// Main async entry point: waits for reload triggers until shutdown.
async fn run(holder: ConfigHolder, config_path: PathBuf) -> Result<()> {
    let cancel = CancellationToken::new();

    // Setup signal handler for graceful shutdown
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for ctrl-c signal");
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown");
        cancel_clone.cancel();
    });

    // SIGHUP triggers a reload, as does a change to the config file.
    let mut sighup = signal(SignalKind::hangup())?;

    let (watcher, mut changes) = ConfigWatcher::new(&config_path);
    let _watch_guard = watcher.run()?;

    info!(
        targets = holder.current().targets.len(),
        "pingmon running"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sighup.recv() => {
                info!("SIGHUP received, reloading configuration");
                apply_reload(&holder, &config_path, &cancel);
            }
            Some(()) = changes.recv() => {
                info!("Config file change detected, reloading configuration");
                apply_reload(&holder, &config_path, &cancel);
            }
        }
    }

    info!("pingmon shutdown complete");
    Ok(())
}

/// Apply a reload and decide whether the process can keep running.
///
/// A failed validation keeps the previous snapshot in effect; an
/// unavailable host identity means targets can no longer be filtered
/// correctly, so the daemon shuts down instead of probing a wrong set.
fn apply_reload(holder: &ConfigHolder, path: &Path, cancel: &CancellationToken) {
    match holder.reload(path) {
        Ok(()) => {
            info!(
                targets = holder.current().targets.len(),
                "Configuration reloaded"
            );
        }
        Err(e @ ConfigError::HostIdentityUnavailable(_)) => {
            error!(error = %e, "Host identity unavailable, shutting down");
            cancel.cancel();
        }
        Err(e) => {
            error!(error = %e, "Reload failed, keeping previous configuration");
        }
    }
}
