//! Where the registration app keeps its files.
//!
//! Locations come from the platform conventions (XDG on Linux): logs live in
//! the cache directory, the optional `rules.json` in the config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "formlet", "registration")
}

/// Log directory, e.g. `~/.cache/registration` on Linux.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// e.g. `~/.config/registration` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn rules_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("rules.json"))
}

/// The log written by the running session.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archived logs kept next to `latest.log`.
pub const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

/// Archive the previous session's log and prune old archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache);
    }
}

/// [`rotate_logs`] against an explicit directory. Returns how many archives
/// were removed.
pub fn rotate_logs_in(dir: &Path) -> usize {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{stamp}.log"));
        if let Err(e) = fs::rename(&latest, &archived) {
            log::warn!("could not archive {}: {e}", latest.display());
        }
    }

    prune_archives(dir)
}

fn prune_archives(dir: &Path) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("could not list {}: {e}", dir.display());
            return 0;
        }
    };

    let mut archives: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();

    if archives.len() <= MAX_OLD_LOGS {
        return 0;
    }

    // Oldest first; ties fall back to the file name.
    archives.sort();
    let excess = archives.len() - MAX_OLD_LOGS;
    archives
        .iter()
        .take(excess)
        .filter(|(_, path)| match fs::remove_file(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not remove old log {}: {e}", path.display());
                false
            }
        })
        .count()
}
