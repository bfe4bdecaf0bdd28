//! lsr - list directory contents as aligned long rows or width-aware grids

pub mod error;
pub mod ids;
pub mod layout;
pub mod listing;
pub mod metadata;
pub mod output;
pub mod terminal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ListError;
pub use ids::{IdResolver, NumericIdResolver, SystemIdResolver};
pub use layout::{FillOrder, LayoutPlan};
pub use listing::{
    DirEntry, DirectoryLister, ListingOptions, ListingOutput, RecursiveWalker, WalkSummary,
};
pub use metadata::{EntryKind, EntryMetadata, format_timestamp, permission_string};
pub use output::{BufferedFormatter, ListingRenderer, OutputConfig, StreamingFormatter};
