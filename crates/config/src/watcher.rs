use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watches `hud.toml` and signals once per burst of writes.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save through rename-and-replace keep triggering reloads.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = hud_config::ConfigWatcher::spawn("/home/user/.config/hud/hud.toml");
/// while rx.recv().await.is_some() {
///     println!("hud.toml changed");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn the watcher task for `path`.
    /// The receiver yields `()` after each detected change of that file.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();

        tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `true` when `event` modifies or creates the file named `file_name`.
fn touches(event: &Event, file_name: &std::ffi::OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(file_name) = path.file_name().map(|n| n.to_os_string()) else {
        error!("Config path '{}' has no file name", path.display());
        return;
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
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
        warn!("Not watching '{}' for changes: {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &file_name) => {
                debug!(kind = ?e.kind, "config file changed");
                // A full channel already holds a pending reload; coalesce.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[tokio::test]
    async fn watcher_reports_its_path() {
        let (watcher, _rx) = ConfigWatcher::spawn("/definitely/not/here/hud.toml");
        assert_eq!(watcher.path(), Path::new("/definitely/not/here/hud.toml"));
    }

    #[test]
    fn modify_of_config_file_counts() {
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/hud/hud.toml");
        assert!(touches(&e, std::ffi::OsStr::new("hud.toml")));
    }

    #[test]
    fn create_of_config_file_counts() {
        let e = event(EventKind::Create(CreateKind::File), "/cfg/hud/hud.toml");
        assert!(touches(&e, std::ffi::OsStr::new("hud.toml")));
    }

    #[test]
    fn other_files_and_removals_are_ignored() {
        let other = event(EventKind::Modify(ModifyKind::Any), "/cfg/hud/hud.toml.swp");
        let removed = event(EventKind::Remove(RemoveKind::File), "/cfg/hud/hud.toml");
        assert!(!touches(&other, std::ffi::OsStr::new("hud.toml")));
        assert!(!touches(&removed, std::ffi::OsStr::new("hud.toml")));
    }
}
