// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchtop Grid: the hole-grid model for optical-bench layout.
//!
//! An optical breadboard is a uniform lattice of mounting holes: a physical
//! `pitch` between adjacent holes, a world-space `origin` at hole `(1, 1)`,
//! and hole counts along each axis. This crate is the single source of truth
//! for translating between that physical description and discrete hole
//! indices, and for producing renderable grid geometry:
//!
//! - [`GridConfig`]: the navigable coordinate system derived from a table
//!   description.
//! - [`HoleIndex`]: a 1-based `(column, row)` hole address.
//! - World ↔ index conversion and nearest-hole snapping.
//! - Hole position iteration and viewport-culled grid lines for rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use benchtop_grid::{GridConfig, HoleIndex};
//!
//! // 10x10 table, 25 world units between holes, hole (1,1) at the origin.
//! let grid = GridConfig::new(25.0, Point::ZERO);
//!
//! // A raw pointer position snaps to the nearest hole.
//! let idx = grid.world_to_hole(Point::new(37.0, 12.0));
//! assert_eq!(idx, HoleIndex::new(2, 1));
//! assert_eq!(grid.hole_to_world(idx), Point::new(25.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Indices are 1-based throughout, matching the physical labeling of
//!   optical breadboards where hole `(1, 1)` is a corner.
//! - All conversions are linear and exactly reversible for in-range
//!   indices; the grid is uniform so no searching is involved.
//! - [`GridConfig::world_to_hole`] may return indices outside
//!   `1..=nx` / `1..=ny`; callers that need a valid mounting position clamp
//!   via [`GridConfig::clamp_index`] or the placement layer.
//! - Configuration is treated defensively: a non-finite or non-positive
//!   pitch is replaced by [`GridConfig::FALLBACK_PITCH`] rather than letting
//!   NaN propagate through snap and clamp arithmetic.
//!
//! This crate is `no_std` compatible (with `alloc`) when built with the
//! `libm` feature in place of `std`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod config;
mod index;
mod lines;

pub use config::GridConfig;
pub use index::HoleIndex;
