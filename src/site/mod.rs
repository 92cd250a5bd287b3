// Site generation module.
// Merges cached listing pages, applies filters and localization, and
// renders the static output.

#![allow(dead_code)]

pub mod lists;
pub mod merge;
pub mod render;
pub mod shim;

pub use lists::FilterLists;
pub use merge::merge_projects;
pub use render::{render_fragments, render_page, sort_by_pushed, write_outputs};
