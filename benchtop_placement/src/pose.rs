// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous and discrete device placement types.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use benchtop_grid::{GridConfig, HoleIndex};

/// Continuous placement of a device: world position plus rotation in
/// degrees, counter-clockwise from the +x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// World x coordinate of the mounting point.
    pub x: f64,
    /// World y coordinate of the mounting point.
    pub y: f64,
    /// Rotation in degrees, CCW from +x.
    pub theta: f64,
}

impl Pose {
    /// Creates a pose from a position and rotation.
    #[must_use]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// The pose's position as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Discrete hole-index form of this pose under the given grid.
    ///
    /// The index is the nearest hole, unclamped; rotation carries over
    /// unchanged.
    #[must_use]
    pub fn to_hole_pose(&self, grid: &GridConfig) -> HolePose {
        let idx = grid.world_to_hole(self.position());
        HolePose {
            i: idx.i,
            j: idx.j,
            theta: self.theta,
        }
    }
}

/// Discrete placement of a device: the 1-based mounting-hole index plus
/// rotation in degrees.
///
/// A `HolePose` and a [`Pose`] describe the same placement and convert into
/// each other through the grid's pitch and origin. They may diverge while a
/// drag is in flight (the continuous pose tracks the pointer live) but are
/// reconciled at drag end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolePose {
    /// Mounting-hole column, 1-based.
    pub i: i64,
    /// Mounting-hole row, 1-based.
    pub j: i64,
    /// Rotation in degrees, CCW from +x.
    pub theta: f64,
}

impl HolePose {
    /// Creates a hole pose from 1-based indices and a rotation.
    #[must_use]
    pub fn new(i: i64, j: i64, theta: f64) -> Self {
        Self { i, j, theta }
    }

    /// The mounting-hole address without the rotation.
    #[must_use]
    pub fn index(&self) -> HoleIndex {
        HoleIndex::new(self.i, self.j)
    }

    /// Continuous form of this pose under the given grid.
    #[must_use]
    pub fn to_pose(&self, grid: &GridConfig) -> Pose {
        let world = grid.hole_to_world(self.index());
        Pose::new(world.x, world.y, self.theta)
    }
}

/// A device's footprint in holes: the `width x height` block it occupies,
/// starting at its mounting hole and extending toward higher indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "FootprintRepr")
)]
pub struct Footprint {
    width: u32,
    height: u32,
}

/// Wire form of [`Footprint`]; routing deserialization through
/// [`Footprint::new`] keeps the at-least-one-hole invariant.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FootprintRepr {
    width: u32,
    height: u32,
}

#[cfg(feature = "serde")]
impl From<FootprintRepr> for Footprint {
    fn from(repr: FootprintRepr) -> Self {
        Self::new(repr.width, repr.height)
    }
}

impl Footprint {
    /// A single-hole footprint.
    pub const SINGLE: Self = Self {
        width: 1,
        height: 1,
    };

    /// Creates a footprint, raising each dimension to at least one hole.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width in holes.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in holes.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if a device with this footprint mounted at `index`
    /// lies entirely within the grid.
    #[must_use]
    pub fn contained_at(&self, index: HoleIndex, grid: &GridConfig) -> bool {
        index.i >= 1
            && index.j >= 1
            && index.i + i64::from(self.width) - 1 <= i64::from(grid.nx())
            && index.j + i64::from(self.height) - 1 <= i64::from(grid.ny())
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Snaps an angle in degrees to the nearest multiple of `step`.
///
/// Rotation is a continuous degree of freedom only coarsely aligned by this
/// helper; the placement resolver never enforces it. A non-positive or
/// non-finite `step` returns `theta` unchanged.
#[must_use]
pub fn snap_theta(theta: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 || !theta.is_finite() {
        return theta;
    }
    (theta / step).round() * step
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use benchtop_grid::{GridConfig, HoleIndex};

    use super::{Footprint, HolePose, Pose, snap_theta};

    #[test]
    fn pose_and_hole_pose_convert_through_the_grid() {
        let grid = GridConfig::new(25.0, Point::ZERO);
        let hole = HolePose::new(3, 4, 45.0);
        let pose = hole.to_pose(&grid);
        assert_eq!(pose, Pose::new(50.0, 75.0, 45.0));
        assert_eq!(pose.to_hole_pose(&grid), hole);
    }

    #[test]
    fn off_hole_pose_rounds_to_nearest_index() {
        let grid = GridConfig::new(25.0, Point::ZERO);
        let pose = Pose::new(37.0, 12.0, 0.0);
        assert_eq!(pose.to_hole_pose(&grid), HolePose::new(2, 1, 0.0));
    }

    #[test]
    fn footprint_dimensions_are_at_least_one() {
        let fp = Footprint::new(0, 0);
        assert_eq!((fp.width(), fp.height()), (1, 1));
        assert_eq!(Footprint::default(), Footprint::SINGLE);
    }

    #[test]
    fn footprint_containment_matches_far_edge() {
        let grid = GridConfig::new(25.0, Point::ZERO).with_holes(10, 10);
        let fp = Footprint::new(3, 1);
        assert!(fp.contained_at(HoleIndex::new(8, 1), &grid));
        assert!(!fp.contained_at(HoleIndex::new(9, 1), &grid));
        assert!(!fp.contained_at(HoleIndex::new(0, 1), &grid));
    }

    #[test]
    fn theta_snaps_to_nearest_step() {
        assert_eq!(snap_theta(47.0, 45.0), 45.0);
        assert_eq!(snap_theta(-22.4, 45.0), 0.0);
        assert_eq!(snap_theta(67.5, 45.0), 90.0);
        // Degenerate steps leave the angle alone.
        assert_eq!(snap_theta(33.0, 0.0), 33.0);
        assert_eq!(snap_theta(33.0, f64::NAN), 33.0);
    }
}
