//! Configuration file watcher driving hot reload.

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Watches the configuration file and emits a change notification for
/// every modify or create event.
///
/// The watcher only signals; applying the reload (and deciding what to do
/// on failure) stays with the receiver, so there is a single reload path.
pub struct ConfigWatcher {
    path: PathBuf,
    change_tx: mpsc::UnboundedSender<()>,
}

impl ConfigWatcher {
    /// Create a new watcher for `path`.
    ///
    /// Returns the watcher and the receiver for change notifications.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (change_tx, change_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                change_tx,
            },
            change_rx,
        )
    }

    /// Start watching in notify's background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    ///
    /// # Errors
    /// Returns a [`notify::Error`] when the watch cannot be established.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.change_tx;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        // Receiver gone means we are shutting down.
                        let _ = tx.send(());
                    }
                }
                Err(e) => error!(error = %e, "Config watch error"),
            },
            notify::Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        info!(path = %self.path.display(), "Config watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn watcher_signals_on_modify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "targets: []\n").unwrap();

        let (watcher, mut changes) = ConfigWatcher::new(&path);
        let _guard = watcher.run().unwrap();

        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap();
        writeln!(file, "# touched").unwrap();
        file.sync_all().unwrap();
        drop(file);

        let notified = tokio::time::timeout(Duration::from_secs(10), changes.recv()).await;
        assert!(notified.is_ok(), "expected a change notification");
    }
}
