//! Short-format grid rows

use unicode_width::UnicodeWidthStr;

use crate::layout::{FillOrder, LayoutPlan};
use crate::listing::DirEntry;

use super::utils::{NameStyle, RenderedLine, Segment};

/// How the grid should be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    pub width: usize,
    pub order: FillOrder,
    pub one_per_line: bool,
}

/// Lay out names and return, per row, `(index, padding)` for every populated cell.
///
/// The last cell of each row gets no padding.
pub fn grid_cells(names: &[&str], style: GridStyle) -> Vec<Vec<(usize, usize)>> {
    let widths: Vec<usize> = names.iter().map(|n| n.width()).collect();
    let plan = if style.one_per_line {
        LayoutPlan::single_column(&widths)
    } else {
        LayoutPlan::compute(&widths, style.width)
    };
    let Some(plan) = plan else {
        return Vec::new();
    };

    (0..plan.row_count)
        .map(|row| {
            let indices: Vec<usize> = plan.row(row, style.order).collect();
            let last = indices.len().saturating_sub(1);
            indices
                .into_iter()
                .enumerate()
                .map(|(pos, idx)| {
                    let pad = if pos == last {
                        0
                    } else {
                        plan.column_width - widths[idx]
                    };
                    (idx, pad)
                })
                .collect()
        })
        .collect()
}

/// Render one directory's entries as grid lines.
pub fn grid_lines(entries: &[DirEntry], style: GridStyle) -> Vec<RenderedLine> {
    let names: Vec<String> = entries
        .iter()
        .map(|e| e.display_name().into_owned())
        .collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    grid_cells(&refs, style)
        .into_iter()
        .map(|row| {
            let mut line = Vec::with_capacity(row.len() * 2);
            for (idx, pad) in row {
                line.push(Segment::Name {
                    text: names[idx].clone(),
                    style: NameStyle::for_entry(&entries[idx]),
                });
                if pad > 0 {
                    line.push(Segment::Text(" ".repeat(pad)));
                }
            }
            line
        })
        .collect()
}
