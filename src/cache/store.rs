// Cache store for listing pages.
// Handles mtime-based freshness checking and atomic page writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, SystemTime};

use log::info;

use crate::error::Result;
use crate::github::GitHubClient;

/// Pages younger than this are served from disk without a fetch.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Check whether a modification time is within the freshness window of `now`.
pub fn is_fresh_at(mtime: SystemTime, now: SystemTime, window: Duration) -> bool {
    match now.duration_since(mtime) {
        Ok(age) => age < window,
        // mtime in the future; treat as fresh rather than refetching forever
        Err(_) => true,
    }
}

/// Check whether a cache file exists and is fresh. Absent files are stale.
pub fn is_fresh(path: &Path) -> bool {
    match modified_at(path) {
        Ok(mtime) => is_fresh_at(mtime, SystemTime::now(), FRESHNESS_WINDOW),
        Err(_) => false,
    }
}

/// Get the modification time of a cache file.
fn modified_at(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Write raw page bytes to the cache.
pub fn write_page(path: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(body)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Refresh the cache for pages 1..=max_page.
///
/// Fresh pages are skipped; stale or absent pages are fetched and
/// overwritten. Any fetch failure aborts the whole run.
pub async fn sync_pages(
    client: &GitHubClient,
    user: &str,
    cache_dir: &Path,
    max_page: u32,
) -> Result<()> {
    fs::create_dir_all(cache_dir)?;

    for page in 1..=max_page {
        let path = super::paths::page_path(cache_dir, page);
        if is_fresh(&path) {
            info!("page {} is fresh, skipping fetch", page);
            continue;
        }

        let body = client.list_user_repos(user, page).await?;
        write_page(&path, &body)?;
        info!("fetched page {} ({} bytes)", page, body.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_within_window() {
        let now = SystemTime::now();
        let mtime = now - Duration::from_secs(60 * 60);
        assert!(is_fresh_at(mtime, now, FRESHNESS_WINDOW));
    }

    #[test]
    fn test_stale_past_window() {
        let now = SystemTime::now();
        let mtime = now - Duration::from_secs(25 * 60 * 60);
        assert!(!is_fresh_at(mtime, now, FRESHNESS_WINDOW));
    }

    #[test]
    fn test_future_mtime_counts_as_fresh() {
        let now = SystemTime::now();
        let mtime = now + Duration::from_secs(60);
        assert!(is_fresh_at(mtime, now, FRESHNESS_WINDOW));
    }

    #[test]
    fn test_absent_file_is_stale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.json");
        assert!(!is_fresh(&path));
    }

    #[test]
    fn test_written_page_is_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.json");

        write_page(&path, b"[]").unwrap();

        assert!(is_fresh(&path));
        assert_eq!(fs::read(&path).unwrap(), b"[]");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("2.json");

        write_page(&path, b"[]").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.json");

        write_page(&path, b"old").unwrap();
        write_page(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}
