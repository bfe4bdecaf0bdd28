//! Options controlling what gets listed and how

use crate::layout::FillOrder;

/// Read-only options for one run, passed into every listing call.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Include entries whose name starts with `.` (plus `.` and `..`).
    pub show_hidden: bool,
    pub long_format: bool,
    /// Fill the grid across rows instead of down columns.
    pub horizontal_layout: bool,
    pub recursive: bool,
    /// Sort by name; when off, entries keep directory enumeration order.
    /// Ignored in recursive mode, which always sorts.
    pub sort: bool,
    /// Force a single-column grid.
    pub one_per_line: bool,
    /// Show numeric owner/group ids instead of names.
    pub numeric_ids: bool,
}

impl ListingOptions {
    /// Whether each directory's entries are sorted by name.
    pub fn sorts(&self) -> bool {
        self.sort || self.recursive
    }

    pub fn fill_order(&self) -> FillOrder {
        if self.horizontal_layout {
            FillOrder::AcrossThenDown
        } else {
            FillOrder::DownThenAcross
        }
    }
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            long_format: false,
            horizontal_layout: false,
            recursive: false,
            sort: true,
            one_per_line: false,
            numeric_ids: false,
        }
    }
}
