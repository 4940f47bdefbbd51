// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchtop Placement: device poses and grid-valid drag resolution.
//!
//! A device on an optical bench has two representations of the same
//! placement: a continuous [`Pose`] in world units and a discrete
//! [`HolePose`] addressing its mounting hole. During a drag the continuous
//! pose follows the pointer; at drag end the placement resolver snaps it to
//! the nearest hole and clamps it so the device's full [`Footprint`] stays
//! on the table. This crate provides:
//!
//! - The pose pair and conversions between them through a grid.
//! - [`DragInteraction`]: the drag state machine with live snap preview and
//!   authoritative commit (locked devices reject the drag outright).
//! - [`resolve_drop`]: the footprint-clamped snap used at commit time.
//! - Angle snapping helpers, independent of grid snapping.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use benchtop_grid::GridConfig;
//! use benchtop_placement::{DragInteraction, DragTarget, Footprint};
//!
//! let grid = GridConfig::new(25.0, Point::ZERO);
//! let mut drag = DragInteraction::default();
//!
//! // Pick up a 3x1 stage.
//! let started = drag.begin(DragTarget {
//!     footprint: Footprint::new(3, 1),
//!     theta: 0.0,
//!     locked: false,
//! });
//! assert!(started);
//!
//! // Live feedback snaps to the nearest hole without footprint clamping.
//! let preview = drag.preview(&grid, Point::new(240.0, 0.0)).unwrap();
//! assert_eq!(preview, Point::new(250.0, 0.0));
//!
//! // Committing clamps so the far edge of the footprint stays on the grid.
//! let placement = drag.commit(&grid, Point::new(240.0, 0.0)).unwrap();
//! assert_eq!(placement.hole_pose.i, 8);
//! ```
//!
//! ## Two-phase snapping
//!
//! The live preview and the commit intentionally disagree near the table
//! edge: the preview is a plain nearest-hole snap (a large device may hang
//! visually past the boundary mid-drag), while the commit applies the
//! footprint clamp. This rubber-band behavior matches how the drag feels in
//! the editor and is pinned down by the test suite rather than unified.
//!
//! This crate is `no_std` compatible when built with the `libm` feature in
//! place of `std`.

#![cfg_attr(not(feature = "std"), no_std)]

mod drag;
mod pose;
mod resolver;

pub use drag::{DragInteraction, DragTarget};
pub use pose::{Footprint, HolePose, Pose, snap_theta};
pub use resolver::{Placement, resolve_drop, resolve_placement};
