//! Directory listing and traversal
//!
//! - `DirectoryLister`: reads one directory, filters hidden entries, sorts
//! - `RecursiveWalker`: drives the lister over a subtree, depth-first pre-order,
//!   handing each directory's entries to a [`ListingOutput`]

mod config;
mod filter;
mod lister;
mod walker;

pub use config::ListingOptions;
pub use filter::{is_visible, sort_by_name};
pub use lister::{DirEntry, DirectoryLister};
pub use walker::{ListingOutput, RecursiveWalker, WalkSummary};
