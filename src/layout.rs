//! Column layout for short-format listings
//!
//! Names are placed in a grid of equally wide columns, each `longest + 2`
//! display columns wide, with as many columns as fit in the output width.
//! Cells are filled either down each column first (the default) or across
//! each row first (`-x`).

use unicode_width::UnicodeWidthStr;

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Order in which entries fill the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillOrder {
    /// Fill a column completely before moving to the next one.
    #[default]
    DownThenAcross,
    /// Fill a row completely before moving to the next one.
    AcrossThenDown,
}

/// Grid dimensions for one directory's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub column_width: usize,
    pub column_count: usize,
    pub row_count: usize,
    pub entry_count: usize,
}

impl LayoutPlan {
    /// Plan a grid for names of the given display widths.
    ///
    /// Returns `None` when there is nothing to lay out.
    pub fn compute(widths: &[usize], line_width: usize) -> Option<Self> {
        let max_len = *widths.iter().max()?;
        let column_width = max_len + COLUMN_GAP;
        let column_count = (line_width / column_width).max(1);
        Some(Self::with_columns(widths.len(), column_width, column_count))
    }

    /// Plan a grid for `names`, measured in display columns.
    pub fn for_names<S: AsRef<str>>(names: &[S], line_width: usize) -> Option<Self> {
        let widths: Vec<usize> = names.iter().map(|n| n.as_ref().width()).collect();
        Self::compute(&widths, line_width)
    }

    /// A single-column plan (`-1`).
    pub fn single_column(widths: &[usize]) -> Option<Self> {
        let max_len = *widths.iter().max()?;
        Some(Self::with_columns(widths.len(), max_len + COLUMN_GAP, 1))
    }

    fn with_columns(entry_count: usize, column_width: usize, column_count: usize) -> Self {
        Self {
            column_width,
            column_count,
            row_count: entry_count.div_ceil(column_count),
            entry_count,
        }
    }

    /// Entry index shown at `(row, column)`, or `None` for a blank cell.
    pub fn index(&self, row: usize, column: usize, order: FillOrder) -> Option<usize> {
        if row >= self.row_count || column >= self.column_count {
            return None;
        }
        let idx = match order {
            FillOrder::DownThenAcross => column * self.row_count + row,
            FillOrder::AcrossThenDown => row * self.column_count + column,
        };
        (idx < self.entry_count).then_some(idx)
    }

    /// Entry indices of one row, left to right, skipping blank cells.
    pub fn row(&self, row: usize, order: FillOrder) -> impl Iterator<Item = usize> + '_ {
        (0..self.column_count).filter_map(move |col| self.index(row, col, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(plan: &LayoutPlan, order: FillOrder) -> Vec<Vec<usize>> {
        (0..plan.row_count)
            .map(|r| plan.row(r, order).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_plan() {
        assert_eq!(LayoutPlan::compute(&[], 80), None);
        assert_eq!(LayoutPlan::single_column(&[]), None);
    }

    #[test]
    fn test_basic_plan() {
        let plan = LayoutPlan::for_names(&["a.txt", "b.txt"], 80).unwrap();
        assert_eq!(plan.column_width, 7);
        assert_eq!(plan.column_count, 11);
        assert_eq!(plan.row_count, 1);
    }

    #[test]
    fn test_oversized_entry_gets_one_column() {
        let plan = LayoutPlan::compute(&[100, 3], 80).unwrap();
        assert_eq!(plan.column_count, 1);
        assert_eq!(plan.row_count, 2);
        assert_eq!(plan.column_width, 102);
    }

    #[test]
    fn test_width_measured_in_display_columns() {
        // Two wide characters: four display columns, six bytes.
        let plan = LayoutPlan::for_names(&["日本", "a"], 80).unwrap();
        assert_eq!(plan.column_width, 6);
    }

    #[test]
    fn test_down_then_across_order() {
        // 5 entries, width 8 / column width 4 => 2 columns, 3 rows
        let plan = LayoutPlan::compute(&[2; 5], 8).unwrap();
        assert_eq!((plan.column_count, plan.row_count), (2, 3));
        assert_eq!(
            grid(&plan, FillOrder::DownThenAcross),
            vec![vec![0, 3], vec![1, 4], vec![2]]
        );
    }

    #[test]
    fn test_across_then_down_order() {
        let plan = LayoutPlan::compute(&[2; 5], 8).unwrap();
        assert_eq!(
            grid(&plan, FillOrder::AcrossThenDown),
            vec![vec![0, 1], vec![2, 3], vec![4]]
        );
    }

    #[test]
    fn test_single_column_plan() {
        let plan = LayoutPlan::single_column(&[3, 1, 4]).unwrap();
        assert_eq!((plan.column_count, plan.row_count), (1, 3));
        assert_eq!(grid(&plan, FillOrder::AcrossThenDown), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_out_of_range_cells_are_blank() {
        let plan = LayoutPlan::compute(&[2; 5], 8).unwrap();
        assert_eq!(plan.index(3, 0, FillOrder::DownThenAcross), None);
        assert_eq!(plan.index(0, 2, FillOrder::AcrossThenDown), None);
        assert_eq!(plan.index(2, 1, FillOrder::AcrossThenDown), None);
    }

    #[test]
    fn test_layout_coverage_and_width_bound() {
        for n in 1..=40usize {
            for width in 1..=60usize {
                for max_len in [1usize, 3, 9, 70] {
                    let mut widths = vec![1; n];
                    widths[n / 2] = max_len;
                    let plan = LayoutPlan::compute(&widths, width).unwrap();

                    assert_eq!(plan.column_width, max_len + COLUMN_GAP);
                    assert!(plan.column_count >= 1);
                    assert!(plan.column_count * plan.row_count >= n);
                    if plan.column_count > 1 {
                        assert!(plan.column_count * plan.column_width <= width);
                    }

                    for order in [FillOrder::DownThenAcross, FillOrder::AcrossThenDown] {
                        let mut seen = vec![0u32; n];
                        for row in 0..plan.row_count {
                            for idx in plan.row(row, order) {
                                seen[idx] += 1;
                            }
                        }
                        assert!(
                            seen.iter().all(|&c| c == 1),
                            "n={} width={} order={:?}",
                            n,
                            width,
                            order
                        );
                    }
                }
            }
        }
    }
}
