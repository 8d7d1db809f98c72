//! Lawn-mower grid layout and its lazy waypoint sequence.

use std::iter::FusedIterator;

use photo_plan_core::Waypoint;
use serde::{Deserialize, Serialize};

use crate::PlanError;

/// A rectangular capture grid flown row by row in alternating directions.
///
/// Row `r` lies at `y = r * spacing[1]`, column `c` at `x = c * spacing[0]`.
/// Even rows are flown with increasing `x`, odd rows with decreasing `x`.
/// The layout is a small `Copy` value; the waypoints themselves are produced
/// on demand by [`GridLayout::iter`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub num_cols: usize,
    pub num_rows: usize,
    /// Distance between neighbouring image centers `[along row, across rows]`, meters.
    pub spacing: [f64; 2],
    /// Flight height, meters.
    pub height: f64,
    /// Capture speed shared by every waypoint, m/s.
    pub speed: f64,
}

impl GridLayout {
    /// Total number of waypoints, `num_rows * num_cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_cols * self.num_rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid cell `(col, row)` visited at flight-order position `index`.
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len() {
            return None;
        }
        let row = index / self.num_cols;
        let k = index % self.num_cols;
        let col = if row % 2 == 1 {
            self.num_cols - 1 - k
        } else {
            k
        };
        Some((col, row))
    }

    /// Waypoint at flight-order position `index`.
    pub fn waypoint(&self, index: usize) -> Option<Waypoint> {
        let (col, row) = self.cell(index)?;
        Some(Waypoint::new(
            col as f64 * self.spacing[0],
            row as f64 * self.spacing[1],
            self.height,
            self.speed,
        ))
    }

    /// Lazy, restartable iterator over the waypoints in flight order.
    pub fn iter(&self) -> Waypoints {
        Waypoints {
            layout: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collect every waypoint into a `Vec`.
    ///
    /// Fails with [`PlanError::GridTooLarge`] when the allocation cannot be
    /// made, instead of aborting the process.
    pub fn to_vec(&self) -> Result<Vec<Waypoint>, PlanError> {
        let mut waypoints = Vec::new();
        waypoints
            .try_reserve_exact(self.len())
            .map_err(|_| PlanError::GridTooLarge {
                num_cols: self.num_cols as f64,
                num_rows: self.num_rows as f64,
            })?;
        waypoints.extend(self.iter());
        Ok(waypoints)
    }

    /// Extent spanned by the image centers, `[x, y]` in meters.
    pub fn covered_extent(&self) -> [f64; 2] {
        [
            self.num_cols.saturating_sub(1) as f64 * self.spacing[0],
            self.num_rows.saturating_sub(1) as f64 * self.spacing[1],
        ]
    }

    /// Length of the lawn-mower polyline through all waypoints, in meters.
    ///
    /// Every row is a full sweep; consecutive rows are joined by one
    /// cross-row step since each row starts where the previous one ended.
    pub fn path_length(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let [extent_x, extent_y] = self.covered_extent();
        self.num_rows as f64 * extent_x + extent_y
    }
}

impl IntoIterator for &GridLayout {
    type Item = Waypoint;
    type IntoIter = Waypoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the waypoints of a [`GridLayout`], in flight order.
#[derive(Clone, Debug)]
pub struct Waypoints {
    layout: GridLayout,
    front: usize,
    back: usize,
}

impl Iterator for Waypoints {
    type Item = Waypoint;

    fn next(&mut self) -> Option<Waypoint> {
        if self.front >= self.back {
            return None;
        }
        let wp = self.layout.waypoint(self.front);
        self.front += 1;
        wp
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Waypoint> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Waypoints {
    fn next_back(&mut self) -> Option<Waypoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.layout.waypoint(self.back)
    }
}

impl ExactSizeIterator for Waypoints {}

impl FusedIterator for Waypoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(num_cols: usize, num_rows: usize) -> GridLayout {
        GridLayout {
            num_cols,
            num_rows,
            spacing: [2.0, 3.0],
            height: 30.0,
            speed: 4.0,
        }
    }

    #[test]
    fn alternates_row_direction() {
        let cells: Vec<(usize, usize)> = (0..9).filter_map(|i| layout(3, 3).cell(i)).collect();
        assert_eq!(
            cells,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
        assert_eq!(layout(3, 3).cell(9), None);
    }

    #[test]
    fn waypoint_scales_cells_by_spacing() {
        let wp = layout(3, 2).waypoint(3).expect("waypoint");
        assert_eq!(wp, Waypoint::new(4.0, 3.0, 30.0, 4.0));
    }

    #[test]
    fn iterator_is_exact_and_double_ended() {
        let grid = layout(4, 3);
        let mut it = grid.iter();
        assert_eq!(it.len(), 12);
        assert_eq!(it.next(), grid.waypoint(0));
        assert_eq!(it.next_back(), grid.waypoint(11));
        assert_eq!(it.len(), 10);

        let rest: Vec<Waypoint> = it.collect();
        let expected: Vec<Waypoint> = (1..11).filter_map(|i| grid.waypoint(i)).collect();
        assert_eq!(rest, expected);

        let reversed: Vec<Waypoint> = grid.iter().rev().collect();
        let mut forward: Vec<Waypoint> = grid.iter().collect();
        forward.reverse();
        assert_eq!(reversed, forward);
    }

    #[test]
    fn nth_skips_without_overrunning() {
        let grid = layout(2, 2);
        let mut it = grid.iter();
        assert_eq!(it.nth(2), grid.waypoint(2));
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_layout_yields_nothing() {
        let grid = layout(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.path_length(), 0.0);
    }

    #[test]
    fn to_vec_matches_iterator() {
        let grid = layout(4, 3);
        let collected: Vec<Waypoint> = grid.iter().collect();
        assert_eq!(grid.to_vec().expect("to_vec"), collected);
    }

    #[test]
    fn to_vec_reports_unallocatable_grid() {
        let grid = layout(usize::MAX / 64, 2);
        assert!(matches!(
            grid.to_vec(),
            Err(PlanError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn path_length_matches_polyline() {
        for (cols, rows) in [(1, 1), (1, 4), (5, 1), (4, 3), (3, 4)] {
            let grid = layout(cols, rows);
            let points: Vec<Waypoint> = grid.iter().collect();
            let polyline: f64 = points
                .windows(2)
                .map(|w| (w[1].position() - w[0].position()).norm())
                .sum();
            assert!(
                (grid.path_length() - polyline).abs() < 1e-9,
                "{cols}x{rows}: {} vs {polyline}",
                grid.path_length()
            );
        }
    }
}
