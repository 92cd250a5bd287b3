// Localization shims.
// A per-repository override file supplies bilingual display text; every
// empty field falls back to the repository's own name and description.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::Repository;

/// One language variant of a shim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShimText {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Override record loaded from `{config_dir}/{lowercase name}.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shim {
    #[serde(default)]
    pub en: ShimText,
    #[serde(default)]
    pub zh: ShimText,
}

/// Display text for one repository after shim resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Localized {
    pub en_name: String,
    pub en_description: String,
    pub zh_name: String,
    pub zh_description: String,
}

impl Localized {
    /// Resolve display text for a repository.
    ///
    /// Without an override file both variants come straight from the
    /// record; with one, each non-empty shim field wins over the base.
    pub fn resolve(repo: &Repository, config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(format!("{}.json", repo.name.to_lowercase()));
        if !path.exists() {
            return Ok(Self::from_base(repo));
        }

        let contents = fs::read_to_string(&path)?;
        let shim: Shim = serde_json::from_str(&contents)?;
        Ok(Self::from_shim(repo, &shim))
    }

    fn from_base(repo: &Repository) -> Self {
        Self {
            en_name: repo.name.clone(),
            en_description: repo.description_text().to_string(),
            zh_name: repo.name.clone(),
            zh_description: repo.description_text().to_string(),
        }
    }

    fn from_shim(repo: &Repository, shim: &Shim) -> Self {
        Self {
            en_name: pick(&shim.en.name, &repo.name),
            en_description: pick(&shim.en.description, repo.description_text()),
            zh_name: pick(&shim.zh.name, &repo.name),
            zh_description: pick(&shim.zh.description, repo.description_text()),
        }
    }
}

/// Shim field if present and non-empty, otherwise the base value.
fn pick(field: &Option<String>, base: &str) -> String {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => base.to_string(),
    }
}
