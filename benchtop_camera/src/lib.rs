// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchtop Camera: a momentum pan/zoom controller for canvas navigation.
//!
//! This crate provides a small, headless camera model in the style of
//! node-graph editors: a uniform zoom factor plus a screen-space pan offset,
//! driven by pointer-drag and wheel events, with inertial motion that decays
//! between discrete input events. It focuses on:
//!
//! - Pan gesture state (begin / move / end, with velocity capture).
//! - Wheel zoom about an anchor point that stays visually stationary.
//! - A fixed-rate momentum tick that advances and decays residual velocity.
//! - Optional world-space pan bounds with zoom-scaled padding.
//! - Exact screen ↔ world coordinate conversion.
//!
//! It does **not** own a scheduler or an event loop. Callers are expected to
//! wire pointer/wheel events into [`Camera::begin_pan`] / [`Camera::pan_to`]
//! / [`Camera::end_pan`] / [`Camera::zoom_about`], and to invoke
//! [`Camera::tick`] from their own animation-frame or fixed-interval
//! callback until it reports that the camera has settled.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use benchtop_camera::Camera;
//!
//! let mut camera = Camera::default();
//!
//! // Drag the canvas by 30 screen pixels.
//! camera.begin_pan(Point::new(100.0, 100.0));
//! camera.pan_to(Point::new(130.0, 100.0));
//! camera.end_pan();
//!
//! // Residual velocity keeps the canvas gliding until it settles.
//! while camera.tick(16.0) {}
//!
//! // Convert a screen point into world space for hit testing.
//! let world = camera.screen_to_world(Point::new(400.0, 300.0));
//! # let _ = world;
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** zoom factor; the
//!   transform is `screen = world * scale + offset`.
//! - A momentum tick never touches gesture state: interleaving ticks with
//!   pan moves is safe and only advances offset and scale.
//! - All out-of-range inputs are handled by defensive clamping: zoom never
//!   leaves the configured range, non-finite wheel deltas are no-ops, and
//!   negative tick durations are treated as zero.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod options;

pub use camera::{Camera, CameraDebugInfo};
pub use options::CameraOptions;
