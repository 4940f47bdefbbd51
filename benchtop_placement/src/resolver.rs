// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Footprint-clamped drop resolution.

use kurbo::Point;

use benchtop_grid::{GridConfig, HoleIndex};

use crate::pose::{Footprint, HolePose, Pose};

/// A committed placement: the reconciled continuous and discrete poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Continuous pose at the snapped mounting position.
    pub pose: Pose,
    /// Discrete hole-index form of the same placement.
    pub hole_pose: HolePose,
}

/// Resolves a raw world-space drop position into a grid-valid mounting
/// position for a device of the given footprint.
///
/// The point is snapped to the nearest hole, then clamped per axis into
/// `[origin, max]`, where `max` is the world position of the last mounting
/// hole that keeps the far edge of the footprint on the table
/// (`hole nx - (width - 1)` along x, and symmetrically along y).
///
/// When the footprint is larger than the grid itself no fully-contained
/// mounting position exists and the clamp range inverts; the resolver then
/// pins the mounting hole to `(1, 1)` and lets the footprint overhang
/// toward higher indices. The result is always a finite point on the hole
/// lattice.
#[must_use]
pub fn resolve_drop(world: Point, footprint: Footprint, grid: &GridConfig) -> Point {
    let snapped = grid.snap_point(world);
    let min = grid.origin();
    let pitch = grid.pitch();

    let far_corner = grid.hole_to_world(HoleIndex::new(i64::from(grid.nx()), i64::from(grid.ny())));
    let max_x = far_corner.x - f64::from(footprint.width() - 1) * pitch;
    let max_y = far_corner.y - f64::from(footprint.height() - 1) * pitch;

    Point::new(
        clamp_axis(snapped.x, min.x, max_x),
        clamp_axis(snapped.y, min.y, max_y),
    )
}

/// Resolves a drop and packages it as a committed [`Placement`].
///
/// The rotation is taken from the current visual orientation and is
/// unaffected by the clamp.
#[must_use]
pub fn resolve_placement(
    world: Point,
    footprint: Footprint,
    theta: f64,
    grid: &GridConfig,
) -> Placement {
    let position = resolve_drop(world, footprint, grid);
    let pose = Pose::new(position.x, position.y, theta);
    Placement {
        pose,
        hole_pose: pose.to_hole_pose(grid),
    }
}

/// Clamps `v` into `[min, max]`, falling back to `min` when the range is
/// inverted (footprint wider than the grid).
fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    if max < min { min } else { v.clamp(min, max) }
}
