// Cache path utilities.
// One file per listing page, named after the page number.

use std::path::{Path, PathBuf};

/// Path to the cache file for a listing page.
pub fn page_path(cache_dir: &Path, page: u32) -> PathBuf {
    cache_dir.join(format!("{}.json", page))
}
