// Cache module for local filesystem caching.
// Stores raw listing pages so repeat builds skip the network.

#![allow(dead_code)]

pub mod paths;
pub mod store;

pub use paths::page_path;
pub use store::{FRESHNESS_WINDOW, is_fresh, sync_pages, write_page};
