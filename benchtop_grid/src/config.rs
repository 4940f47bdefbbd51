// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::index::HoleIndex;

/// A navigable hole-grid coordinate system derived from a table's physical
/// description.
///
/// `GridConfig` is immutable during an interaction: it is built once per
/// table load or explicit edit and read by the camera, placement, and
/// rendering layers. It can be used to:
/// - Convert between world coordinates and 1-based hole indices.
/// - Snap a raw world point to the nearest hole.
/// - Produce hole positions and grid lines for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pitch: f64,
    origin: Point,
    nx: u32,
    ny: u32,
    margin: f64,
}

impl GridConfig {
    /// Pitch substituted when a table description carries a non-finite or
    /// non-positive pitch.
    pub const FALLBACK_PITCH: f64 = 25.0;

    /// Default hole count along each axis.
    pub const DEFAULT_HOLES: u32 = 10;

    /// Default border margin outside the outermost holes, in world units
    /// (1.5 inches on a metric-unit table).
    pub const DEFAULT_MARGIN: f64 = 38.1;

    /// Creates a grid with the given pitch and origin and default hole
    /// counts and margin.
    ///
    /// The origin is the world position of hole `(1, 1)`. A non-finite or
    /// non-positive `pitch` is replaced by [`Self::FALLBACK_PITCH`] so that
    /// snap and clamp arithmetic never sees NaN.
    #[must_use]
    pub fn new(pitch: f64, origin: Point) -> Self {
        let pitch = if pitch.is_finite() && pitch > 0.0 {
            pitch
        } else {
            Self::FALLBACK_PITCH
        };
        Self {
            pitch,
            origin,
            nx: Self::DEFAULT_HOLES,
            ny: Self::DEFAULT_HOLES,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Returns this grid with the given hole counts.
    ///
    /// Counts are raised to at least 1; a single-hole axis is legal and has
    /// zero extent.
    #[must_use]
    pub fn with_holes(mut self, nx: u32, ny: u32) -> Self {
        self.nx = nx.max(1);
        self.ny = ny.max(1);
        self
    }

    /// Returns this grid with the given border margin.
    ///
    /// The margin only affects [`Self::border_bounds`]; it plays no role in
    /// snapping or placement. Non-finite margins fall back to
    /// [`Self::DEFAULT_MARGIN`].
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = if margin.is_finite() {
            margin.max(0.0)
        } else {
            Self::DEFAULT_MARGIN
        };
        self
    }

    /// Physical distance between adjacent holes.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// World position of hole `(1, 1)`.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Hole count along the x axis.
    #[must_use]
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Hole count along the y axis.
    #[must_use]
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Border margin outside the outermost holes.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Extent of the hole lattice along x: `(nx - 1) * pitch`.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.nx - 1) * self.pitch
    }

    /// Extent of the hole lattice along y: `(ny - 1) * pitch`.
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.ny - 1) * self.pitch
    }

    /// Returns the index of the hole nearest to a world point.
    ///
    /// The result is not clamped: points beyond the table edge yield
    /// indices outside `1..=nx` / `1..=ny` (including zero or negative
    /// components). Use [`Self::clamp_index`] when the result must be a
    /// valid mounting position.
    #[must_use]
    pub fn world_to_hole(&self, point: Point) -> HoleIndex {
        let i = ((point.x - self.origin.x) / self.pitch).round() as i64 + 1;
        let j = ((point.y - self.origin.y) / self.pitch).round() as i64 + 1;
        HoleIndex::new(i, j)
    }

    /// Returns the world position of a hole index.
    ///
    /// Exact inverse of [`Self::world_to_hole`] for any index; the index is
    /// not required to be in bounds.
    #[must_use]
    pub fn hole_to_world(&self, index: HoleIndex) -> Point {
        self.origin
            + Vec2::new(
                (index.i - 1) as f64 * self.pitch,
                (index.j - 1) as f64 * self.pitch,
            )
    }

    /// Snaps a raw world point to the world position of the nearest hole.
    ///
    /// Composition of [`Self::world_to_hole`] and [`Self::hole_to_world`];
    /// no index clamping is applied. Snapping a point that already lies on
    /// a hole returns it unchanged.
    #[must_use]
    pub fn snap_point(&self, point: Point) -> Point {
        self.hole_to_world(self.world_to_hole(point))
    }

    /// Clamps a hole index into the valid range `1..=nx` / `1..=ny`.
    #[must_use]
    pub fn clamp_index(&self, index: HoleIndex) -> HoleIndex {
        index.clamped(self.nx, self.ny)
    }
}
