// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table description read from a project file.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use tracing::warn;

use benchtop_grid::GridConfig;

/// Physical description of one optical table, as persisted in a project.
///
/// This is a read-only snapshot taken at table load: the grid derived from
/// it stays fixed for the duration of an interaction and is rebuilt only on
/// explicit edits. `width`, `height`, and `units` are informational fields
/// carried for the persistence layer; the grid is derived from pitch,
/// origin, and hole counts alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Physical distance between adjacent holes.
    pub pitch: f64,
    /// World position of hole (1, 1).
    pub origin: Point,
    /// Hole count along x; defaults to the grid's stock count.
    #[serde(default)]
    pub nx: Option<u32>,
    /// Hole count along y; defaults to the grid's stock count.
    #[serde(default)]
    pub ny: Option<u32>,
    /// Border margin outside the outermost holes.
    #[serde(default)]
    pub margin: Option<f64>,
    /// Overall table width, informational.
    #[serde(default)]
    pub width: Option<f64>,
    /// Overall table height, informational.
    #[serde(default)]
    pub height: Option<f64>,
    /// Measurement units label, informational.
    #[serde(default)]
    pub units: Option<String>,
}

impl TableSpec {
    /// Derives the navigable grid from this description.
    ///
    /// Malformed numeric fields never poison the grid: a non-finite or
    /// non-positive pitch is replaced by [`GridConfig::FALLBACK_PITCH`] and
    /// logged, and missing counts or margins take the grid defaults.
    #[must_use]
    pub fn grid(&self) -> GridConfig {
        if !(self.pitch.is_finite() && self.pitch > 0.0) {
            warn!(pitch = self.pitch, "table pitch is malformed, substituting default");
        }
        let origin = if self.origin.is_finite() {
            self.origin
        } else {
            warn!("table origin is non-finite, substituting zero");
            Point::ZERO
        };

        let mut grid = GridConfig::new(self.pitch, origin).with_holes(
            self.nx.unwrap_or(GridConfig::DEFAULT_HOLES),
            self.ny.unwrap_or(GridConfig::DEFAULT_HOLES),
        );
        if let Some(margin) = self.margin {
            grid = grid.with_margin(margin);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use benchtop_grid::GridConfig;

    use super::TableSpec;

    fn spec(pitch: f64) -> TableSpec {
        TableSpec {
            pitch,
            origin: Point::ZERO,
            nx: None,
            ny: None,
            margin: None,
            width: None,
            height: None,
            units: None,
        }
    }

    #[test]
    fn minimal_spec_takes_grid_defaults() {
        let grid = spec(12.7).grid();
        assert_eq!(grid.pitch(), 12.7);
        assert_eq!((grid.nx(), grid.ny()), (10, 10));
        assert_eq!(grid.margin(), GridConfig::DEFAULT_MARGIN);
    }

    #[test]
    fn malformed_pitch_is_replaced_not_propagated() {
        for bad in [f64::NAN, 0.0, -3.0] {
            let grid = spec(bad).grid();
            assert_eq!(grid.pitch(), GridConfig::FALLBACK_PITCH);
        }
    }

    #[test]
    fn non_finite_origin_is_zeroed() {
        let mut s = spec(25.0);
        s.origin = Point::new(f64::NAN, 10.0);
        assert_eq!(s.grid().origin(), Point::ZERO);
    }

    #[test]
    fn explicit_counts_and_margin_are_honored() {
        let mut s = spec(25.0);
        s.nx = Some(40);
        s.ny = Some(20);
        s.margin = Some(10.0);
        let grid = s.grid();
        assert_eq!((grid.nx(), grid.ny()), (40, 20));
        assert_eq!(grid.margin(), 10.0);
    }

    #[test]
    fn one_sided_count_defaults_the_other_axis() {
        let mut s = spec(25.0);
        s.nx = Some(30);
        let grid = s.grid();
        assert_eq!((grid.nx(), grid.ny()), (30, 10));
    }

    #[test]
    fn specs_round_trip_through_json() {
        let json = r#"{
            "pitch": 25.0,
            "origin": { "x": 0.0, "y": 0.0 },
            "nx": 20,
            "ny": 10,
            "units": "mm"
        }"#;
        let s: TableSpec = serde_json::from_str(json).unwrap();
        assert_eq!(s.units.as_deref(), Some("mm"));
        let grid = s.grid();
        assert_eq!((grid.nx(), grid.ny()), (20, 10));
    }
}
