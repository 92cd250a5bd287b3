// GitHub API module.
// Provides client and types for the repository listing endpoint.

#![allow(dead_code)]

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
