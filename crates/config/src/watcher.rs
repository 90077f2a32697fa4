use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watches the config file and sends a notification whenever it is written,
/// created or removed.
///
/// The parent directory is watched rather than the file itself, so a config
/// created after startup (or replaced by an editor's atomic rename) is still
/// picked up.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_, mut rx) = notch_config::ConfigWatcher::spawn("/home/user/.config/notch/notch.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        // Most commonly the config directory does not exist; nothing to reload.
        warn!("Not watching '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                debug!(kind = ?e.kind, "config file event");
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// `true` for modify / create / remove events that name the config file.
fn touches(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_) | Remove(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::{event::CreateKind, event::ModifyKind, Event, EventKind};

    #[test]
    fn only_events_for_the_config_file_count() {
        let cfg = Path::new("/tmp/notch/notch.toml");

        let hit = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/notch/notch.toml"));
        let other = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/tmp/notch/notch.toml.swp"));
        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/tmp/notch/notch.toml"));

        assert!(touches(&hit, cfg));
        assert!(!touches(&other, cfg));
        assert!(!touches(&access, cfg));
    }
}
