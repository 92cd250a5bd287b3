// Filter list loading.
// The ignore list and fork-allow list are flat JSON arrays of repository
// names maintained next to the template.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name sets controlling which repositories reach the output.
#[derive(Debug, Default)]
pub struct FilterLists {
    /// Names excluded from the output regardless of any other flag.
    pub ignore: HashSet<String>,
    /// Fork names that are kept despite being forks.
    pub fork_allow: HashSet<String>,
}

impl FilterLists {
    /// Load both lists from their JSON files. A missing file is fatal.
    pub fn load(ignore_file: &Path, forks_file: &Path) -> Result<Self> {
        Ok(Self {
            ignore: load_names(ignore_file)?,
            fork_allow: load_names(forks_file)?,
        })
    }
}

fn load_names(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)?;
    let names: Vec<String> = serde_json::from_str(&contents)?;
    Ok(names.into_iter().collect())
}
