//! Platform-specific directory paths and log rotation.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "selectbox";
const APPLICATION: &str = "selectbox-tui";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
pub const MAX_OLD_LOGS: usize = 10;

/// Cache directory, where logs are written.
///
/// - Linux: `$XDG_CACHE_HOME/selectbox-tui` or `~/.cache/selectbox-tui`
/// - macOS: `~/Library/Caches/dev.selectbox.selectbox-tui`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for the current run inside `dir`.
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join(LATEST_LOG)
}

/// Archive the previous run's log in `dir` and prune old archives.
///
/// Returns the archive path when there was a log to move. A missing
/// directory is not an error: there is nothing to rotate yet.
pub fn rotate_logs(dir: &Path) -> io::Result<Option<PathBuf>> {
    let latest = log_file(dir);
    let archived = if latest.is_file() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let target = dir.join(format!("{stamp}.log"));
        fs::rename(&latest, &target)?;
        Some(target)
    } else {
        None
    };

    if dir.is_dir() {
        prune_archives(dir, MAX_OLD_LOGS)?;
    }
    Ok(archived)
}

/// Delete the oldest archived logs in `dir` until at most `keep` remain.
fn prune_archives(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path.extension().is_some_and(|ext| ext == "log")
            && path.file_name().is_some_and(|name| name != LATEST_LOG);
        if is_archive {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
            archives.push((modified, path));
        }
    }

    if archives.len() <= keep {
        return Ok(0);
    }

    // Oldest first; ties fall back to the timestamped name.
    archives.sort();
    let excess = archives.len() - keep;
    for (_, path) in archives.iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(excess)
}
