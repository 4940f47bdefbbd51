// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The device record exchanged with the project store.

use serde::{Deserialize, Serialize};

use benchtop_placement::{DragTarget, Footprint, HolePose, Placement, Pose};

use crate::kind::DeviceKind;

/// One placed device, as stored in a project file.
///
/// `pose` and `hole_pose` are two representations of the same placement;
/// the placement layer reconciles them at drag end. `size` is the footprint
/// in holes. The record is plain data: reading and writing project JSON is
/// the persistence layer's concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Stable identifier within the project.
    pub id: String,
    /// The device's kind.
    pub kind: DeviceKind,
    /// Continuous placement in world units.
    pub pose: Pose,
    /// Discrete mounting-hole placement.
    pub hole_pose: HolePose,
    /// Footprint in holes.
    pub size: Footprint,
    /// Locked devices refuse interactive move/rotate/resize.
    #[serde(default)]
    pub locked: bool,
}

impl DeviceRecord {
    /// Creates an unlocked record from a resolved placement.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: DeviceKind, placement: Placement, size: Footprint) -> Self {
        Self {
            id: id.into(),
            kind,
            pose: placement.pose,
            hole_pose: placement.hole_pose,
            size,
            locked: false,
        }
    }

    /// Writes a committed placement back into the record.
    pub fn apply_placement(&mut self, placement: Placement) {
        self.pose = placement.pose;
        self.hole_pose = placement.hole_pose;
    }

    /// The drag-resolver view of this record.
    #[must_use]
    pub fn drag_target(&self) -> DragTarget {
        DragTarget {
            footprint: self.size,
            theta: self.pose.theta,
            locked: self.locked,
        }
    }
}
