// GitHub API response types.
// Defines structs for deserializing the repository listing response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub repository as returned by the user listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub private: bool,
    pub fork: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Null for repositories that have never received a push.
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub license: Option<License>,
}

/// License descriptor attached to a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Repository {
    /// Description with a missing value flattened to the empty string.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Homepage with null and empty treated alike.
    pub fn homepage_text(&self) -> &str {
        self.homepage.as_deref().unwrap_or("")
    }
}
