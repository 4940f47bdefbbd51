// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag interaction state machine for moving a device.

use kurbo::Point;

use benchtop_grid::GridConfig;

use crate::pose::Footprint;
use crate::resolver::{Placement, resolve_placement};

/// The device being dragged, as seen by the resolver.
///
/// The placement layer does not know about device records; callers hand it
/// the three facts a drag needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTarget {
    /// Footprint of the dragged device, in holes.
    pub footprint: Footprint,
    /// Current visual rotation in degrees.
    pub theta: f64,
    /// Whether the device is locked against interactive moves.
    pub locked: bool,
}

/// State machine for one device drag.
///
/// A drag runs begin → (preview | rotate)* → commit, or ends early via
/// [`DragInteraction::cancel`]. Locked devices reject the drag at
/// [`DragInteraction::begin`] and no resolver computation occurs for them.
///
/// The preview and the commit deliberately use different snapping: see the
/// crate docs on two-phase snapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragInteraction {
    target: Option<DragTarget>,
}

impl DragInteraction {
    /// Begins dragging a device.
    ///
    /// Returns `false` (and stays idle) when the target is locked or when
    /// another drag is already active.
    pub fn begin(&mut self, target: DragTarget) -> bool {
        if target.locked || self.target.is_some() {
            return false;
        }
        self.target = Some(target);
        true
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// The target of the active drag, if any.
    #[must_use]
    pub fn target(&self) -> Option<DragTarget> {
        self.target
    }

    /// Updates the dragged device's rotation mid-drag.
    ///
    /// Ignored when no drag is active.
    pub fn set_theta(&mut self, theta: f64) {
        if let Some(target) = &mut self.target {
            target.theta = theta;
        }
    }

    /// Live snap feedback for the current pointer position in world space.
    ///
    /// Returns the nearest-hole position without footprint clamping: this
    /// is visual feedback only and is never committed. `None` when no drag
    /// is active.
    #[must_use]
    pub fn preview(&self, grid: &GridConfig, world: Point) -> Option<Point> {
        self.target.map(|_| grid.snap_point(world))
    }

    /// Commits the drag at the given world position.
    ///
    /// Performs the authoritative footprint-clamped resolution and ends the
    /// interaction. Returns `None` when no drag is active.
    pub fn commit(&mut self, grid: &GridConfig, world: Point) -> Option<Placement> {
        let target = self.target.take()?;
        Some(resolve_placement(world, target.footprint, target.theta, grid))
    }

    /// Abandons the active drag without committing a placement.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use benchtop_grid::GridConfig;

    use super::{DragInteraction, DragTarget, Footprint};

    fn target(width: u32, height: u32) -> DragTarget {
        DragTarget {
            footprint: Footprint::new(width, height),
            theta: 0.0,
            locked: false,
        }
    }

    #[test]
    fn locked_devices_reject_drag_start() {
        let mut drag = DragInteraction::default();
        let rejected = DragTarget {
            locked: true,
            ..target(1, 1)
        };
        assert!(!drag.begin(rejected));
        assert!(!drag.is_active());

        let grid = GridConfig::new(25.0, Point::ZERO);
        assert_eq!(drag.preview(&grid, Point::new(30.0, 30.0)), None);
        assert_eq!(drag.commit(&grid, Point::new(30.0, 30.0)), None);
    }

    #[test]
    fn second_begin_while_active_is_rejected() {
        let mut drag = DragInteraction::default();
        assert!(drag.begin(target(1, 1)));
        assert!(!drag.begin(target(2, 2)));
        // The original target is still the active one.
        assert_eq!(drag.target().unwrap().footprint, Footprint::SINGLE);
    }

    #[test]
    fn commit_ends_the_interaction() {
        let grid = GridConfig::new(25.0, Point::ZERO);
        let mut drag = DragInteraction::default();
        drag.begin(target(1, 1));

        let placement = drag.commit(&grid, Point::new(37.0, 12.0)).unwrap();
        assert_eq!(placement.hole_pose.i, 2);
        assert_eq!(placement.hole_pose.j, 1);
        assert!(!drag.is_active());
    }

    #[test]
    fn cancel_discards_the_drag() {
        let grid = GridConfig::new(25.0, Point::ZERO);
        let mut drag = DragInteraction::default();
        drag.begin(target(3, 1));
        drag.cancel();
        assert!(!drag.is_active());
        assert_eq!(drag.commit(&grid, Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn rotation_set_mid_drag_lands_in_the_commit() {
        let grid = GridConfig::new(25.0, Point::ZERO);
        let mut drag = DragInteraction::default();
        drag.begin(target(1, 1));
        drag.set_theta(90.0);
        let placement = drag.commit(&grid, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(placement.pose.theta, 90.0);
    }
}
