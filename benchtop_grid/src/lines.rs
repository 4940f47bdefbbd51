// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable grid geometry: hole positions, culled grid lines, and the
//! table border rectangle.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Rect};

use crate::config::GridConfig;
use crate::index::HoleIndex;

impl GridConfig {
    /// Iterates the world positions of all `nx * ny` holes.
    ///
    /// Iteration is row-major (row 1 first, column 1 first within a row).
    /// Holes are unordered as far as rendering is concerned; the order is
    /// fixed only so the sequence is deterministic.
    pub fn holes(&self) -> impl Iterator<Item = Point> + '_ {
        let (nx, ny) = (i64::from(self.nx()), i64::from(self.ny()));
        (1..=ny).flat_map(move |j| (1..=nx).map(move |i| self.hole_to_world(HoleIndex::new(i, j))))
    }

    /// Returns the major grid lines intersecting `viewport`, expanded by one
    /// pitch of padding.
    ///
    /// Lines run the full extent of the hole lattice; only those whose fixed
    /// coordinate falls inside the padded viewport are produced, so the cost
    /// is bounded by the visible region rather than the total hole count.
    #[must_use]
    pub fn grid_lines(&self, viewport: Rect) -> Vec<Line> {
        let viewport = viewport.abs().inflate(self.pitch(), self.pitch());
        let origin = self.origin();
        let (x1, y1) = (origin.x + self.width(), origin.y + self.height());

        let mut lines = Vec::new();

        // Vertical lines, one per visible column.
        for i in self.axis_range(viewport.x0, viewport.x1, origin.x, self.nx()) {
            let x = origin.x + (i - 1) as f64 * self.pitch();
            lines.push(Line::new(Point::new(x, origin.y), Point::new(x, y1)));
        }

        // Horizontal lines, one per visible row.
        for j in self.axis_range(viewport.y0, viewport.y1, origin.y, self.ny()) {
            let y = origin.y + (j - 1) as f64 * self.pitch();
            lines.push(Line::new(Point::new(origin.x, y), Point::new(x1, y)));
        }

        lines
    }

    /// Visual bounding rectangle of the table including the border margin.
    ///
    /// Used for drawing the table outline only; placement never consults
    /// the margin.
    #[must_use]
    pub fn border_bounds(&self) -> Rect {
        let origin = self.origin();
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.width(),
            origin.y + self.height(),
        )
        .inflate(self.margin(), self.margin())
    }

    /// 1-based index range of grid lines whose fixed coordinate lies within
    /// `[lo, hi]` on one axis. Empty when the span misses the lattice.
    fn axis_range(
        &self,
        lo: f64,
        hi: f64,
        axis_origin: f64,
        count: u32,
    ) -> core::ops::RangeInclusive<i64> {
        let first = ((lo - axis_origin) / self.pitch()).ceil() as i64 + 1;
        let last = ((hi - axis_origin) / self.pitch()).floor() as i64 + 1;
        first.max(1)..=last.min(i64::from(count))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::GridConfig;

    #[test]
    fn holes_covers_the_full_lattice_row_major() {
        let grid = GridConfig::new(10.0, Point::ZERO).with_holes(3, 2);
        let holes: alloc::vec::Vec<Point> = grid.holes().collect();
        assert_eq!(
            holes,
            alloc::vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
            ]
        );
    }

    #[test]
    fn grid_lines_are_culled_to_the_viewport() {
        let grid = GridConfig::new(25.0, Point::ZERO).with_holes(100, 100);

        // A small viewport in the middle of a large table sees far fewer
        // lines than the 200 the table has in total.
        let viewport = Rect::new(500.0, 500.0, 600.0, 600.0);
        let lines = grid.grid_lines(viewport);
        assert!(!lines.is_empty());
        assert!(lines.len() < 20, "expected a culled line set, got {}", lines.len());

        // Every produced line's fixed coordinate lies inside the padded
        // viewport.
        let padded = viewport.inflate(25.0, 25.0);
        for line in &lines {
            if line.p0.x == line.p1.x {
                assert!(line.p0.x >= padded.x0 && line.p0.x <= padded.x1);
            } else {
                assert!(line.p0.y >= padded.y0 && line.p0.y <= padded.y1);
            }
        }
    }

    #[test]
    fn grid_lines_outside_the_table_are_empty() {
        let grid = GridConfig::new(25.0, Point::ZERO).with_holes(10, 10);
        // Far away from the table; the padded viewport overlaps no line, so
        // the clamped ranges collapse.
        let lines = grid.grid_lines(Rect::new(5000.0, 5000.0, 5100.0, 5100.0));
        assert!(lines.is_empty());
    }

    #[test]
    fn viewport_covering_everything_yields_all_lines() {
        let grid = GridConfig::new(25.0, Point::ZERO).with_holes(10, 8);
        let lines = grid.grid_lines(Rect::new(-1000.0, -1000.0, 1000.0, 1000.0));
        assert_eq!(lines.len(), 10 + 8);
    }

    #[test]
    fn border_bounds_includes_margin_on_all_sides() {
        let grid = GridConfig::new(25.0, Point::new(10.0, 20.0))
            .with_holes(5, 5)
            .with_margin(38.1);
        let bounds = grid.border_bounds();
        assert_eq!(bounds.x0, 10.0 - 38.1);
        assert_eq!(bounds.y0, 20.0 - 38.1);
        assert_eq!(bounds.x1, 10.0 + 100.0 + 38.1);
        assert_eq!(bounds.y1, 20.0 + 100.0 + 38.1);
    }
}
