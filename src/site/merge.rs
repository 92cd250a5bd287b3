// Merge stage.
// Loads every cached page, deserializes it, and keeps the records that
// pass the visibility, fork, and ignore filters.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::github::Repository;

use super::lists::FilterLists;

/// Whether a record belongs in the merged output.
pub fn passes_filters(repo: &Repository, lists: &FilterLists) -> bool {
    if repo.private {
        return false;
    }
    if repo.fork && !lists.fork_allow.contains(&repo.name) {
        return false;
    }
    !lists.ignore.contains(&repo.name)
}

/// Load all cached pages and accumulate the filtered records.
///
/// Files that fail to parse contribute nothing; every other error is
/// fatal. Accumulation order follows the directory listing.
pub fn merge_projects(cache_dir: &Path, lists: &FilterLists) -> Result<Vec<Repository>> {
    let mut merged = Vec::new();

    for entry in fs::read_dir(cache_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let contents = fs::read(&path)?;
        let projects: Vec<Repository> = match serde_json::from_slice(&contents) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("skipping malformed cache file {}: {}", path.display(), e);
                continue;
            }
        };

        merged.extend(projects.into_iter().filter(|p| passes_filters(p, lists)));
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn repo(name: &str, private: bool, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            description: Some(format!("{} description", name)),
            html_url: format!("https://github.com/octocat/{}", name),
            homepage: None,
            private,
            fork,
            created_at: Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap(),
            pushed_at: Some(Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap()),
            license: None,
        }
    }

    fn make_lists(ignore: &[&str], fork_allow: &[&str]) -> FilterLists {
        FilterLists {
            ignore: ignore.iter().map(|s| s.to_string()).collect(),
            fork_allow: fork_allow.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_private_never_passes() {
        let lists = make_lists(&[], &[]);
        assert!(!passes_filters(&repo("a", true, false), &lists));
        // even when fork-allowed by name
        let lists = make_lists(&[], &["a"]);
        assert!(!passes_filters(&repo("a", true, true), &lists));
    }

    #[test]
    fn test_fork_passes_only_when_allowed() {
        let lists = make_lists(&[], &["kept"]);
        assert!(passes_filters(&repo("kept", false, true), &lists));
        assert!(!passes_filters(&repo("dropped", false, true), &lists));
    }

    #[test]
    fn test_ignore_wins_over_everything() {
        let lists = make_lists(&["kept"], &["kept"]);
        assert!(!passes_filters(&repo("kept", false, true), &lists));
        assert!(!passes_filters(&repo("kept", false, false), &lists));
    }

    #[test]
    fn test_plain_public_repo_passes() {
        let lists = make_lists(&[], &[]);
        assert!(passes_filters(&repo("plain", false, false), &lists));
    }

    #[test]
    fn test_merge_filters_and_tolerates_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let page = serde_json::to_string(&vec![
            repo("keep-me", false, false),
            repo("private", true, false),
            repo("fork", false, true),
            repo("ignored", false, false),
        ])
        .unwrap();
        fs::write(temp_dir.path().join("1.json"), page).unwrap();
        fs::write(temp_dir.path().join("2.json"), "not json at all").unwrap();

        let lists = make_lists(&["ignored"], &[]);
        let merged = merge_projects(temp_dir.path(), &lists).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "keep-me");
    }
}
