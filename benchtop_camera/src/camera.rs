// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::options::CameraOptions;

/// Reference frame duration for velocity integration, in milliseconds.
///
/// Velocities are captured as per-event deltas at a nominal 60 Hz input
/// rate; [`Camera::tick`] scales its advance by `dt / FRAME_MS` so that
/// momentum speed is independent of the tick rate.
const FRAME_MS: f64 = 1000.0 / 60.0;

/// A pan/zoom camera over a world-space canvas, with momentum.
///
/// `Camera` tracks a screen-space pan offset and a uniform zoom factor. The
/// mapping between spaces is `screen = world * scale + offset`, and the two
/// conversion methods are exact inverses of each other for any state.
///
/// Pan gestures go through [`Camera::begin_pan`] → [`Camera::pan_to`] →
/// [`Camera::end_pan`]; each move captures its delta as the residual pan
/// velocity, so releasing the pointer mid-swipe leaves the canvas gliding.
/// Wheel zooming re-centers the offset so the world point under the anchor
/// stays visually stationary. [`Camera::tick`] advances and decays residual
/// velocities and reports whether the camera is still in motion.
#[derive(Clone, Debug)]
pub struct Camera {
    offset: Vec2,
    scale: f64,
    pan_bounds: Option<Rect>,
    last_pointer: Option<Point>,
    pan_velocity: Vec2,
    zoom_velocity: f64,
    options: CameraOptions,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}

impl Camera {
    /// Creates a camera at the identity transform with the given options.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0_f64.clamp(options.min_zoom, options.max_zoom),
            pan_bounds: None,
            last_pointer: None,
            pan_velocity: Vec2::ZERO,
            zoom_velocity: 0.0,
            options,
        }
    }

    /// Current screen-space pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current uniform zoom factor, always within the configured range.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Current residual pan velocity, in screen pixels per frame.
    #[must_use]
    pub fn pan_velocity(&self) -> Vec2 {
        self.pan_velocity
    }

    /// Current residual zoom velocity, in scale units per frame.
    #[must_use]
    pub fn zoom_velocity(&self) -> f64 {
        self.zoom_velocity
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Sets optional world-space pan bounds.
    ///
    /// When bounds are configured the offset is clamped so the bounded
    /// region stays within reach of the screen origin, with padding that
    /// widens as the camera zooms in (see [`Camera::clamp_viewport`]).
    pub fn set_pan_bounds(&mut self, bounds: Option<Rect>) {
        self.pan_bounds = bounds.map(|rect| rect.abs());
        self.clamp_viewport();
    }

    /// Returns the configured pan bounds, if any.
    #[must_use]
    pub fn pan_bounds(&self) -> Option<Rect> {
        self.pan_bounds
    }

    /// Begins a pan gesture at a screen position.
    ///
    /// Records the pointer and zeroes any residual pan velocity so that a
    /// fresh grab always stops the canvas dead.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.last_pointer = Some(pointer);
        self.pan_velocity = Vec2::ZERO;
    }

    /// Advances an active pan gesture to a new screen position.
    ///
    /// Moves the offset by the pointer delta scaled by `pan_speed`, clamps
    /// against any pan bounds, and captures the delta as the residual pan
    /// velocity. A move without a preceding [`Camera::begin_pan`] is
    /// ignored.
    pub fn pan_to(&mut self, pointer: Point) {
        let Some(last) = self.last_pointer else {
            return;
        };
        let delta = (pointer - last) * self.options.pan_speed;
        self.offset += delta;
        self.clamp_viewport();
        self.pan_velocity = delta;
        self.last_pointer = Some(pointer);
    }

    /// Ends the active pan gesture.
    ///
    /// Clears the tracked pointer; the last captured pan velocity is
    /// retained for the momentum tick to decay.
    pub fn end_pan(&mut self) {
        self.last_pointer = None;
    }

    /// Cancels the active pan gesture (pointer lost, escape pressed).
    ///
    /// Identical to [`Camera::end_pan`]: the gesture state returns to idle
    /// and the last observed velocity is retained, so an aborted swipe
    /// still glides to a stop.
    pub fn cancel_pan(&mut self) {
        self.end_pan();
    }

    /// Zooms by a wheel delta about an anchor point in screen space.
    ///
    /// The wheel sign is inverted ("scroll down" zooms out). The resulting
    /// scale is clamped into the configured range and the offset is
    /// re-centered so the world point under `anchor` stays at `anchor` on
    /// screen. A zero or non-finite `wheel_delta` is a no-op.
    pub fn zoom_about(&mut self, anchor: Point, wheel_delta: f64) {
        if !wheel_delta.is_finite() || wheel_delta == 0.0 {
            return;
        }
        // An extreme single wheel event is clamped to one order of
        // magnitude so the factor can never go negative.
        let factor = (1.0 - wheel_delta * self.options.zoom_speed).clamp(0.1, 10.0);

        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.options.min_zoom, self.options.max_zoom);
        if new_scale == old_scale {
            return;
        }

        let ratio = new_scale / old_scale;
        self.scale = new_scale;
        self.offset = anchor.to_vec2() + (self.offset - anchor.to_vec2()) * ratio;
        self.zoom_velocity = new_scale - old_scale;
        self.clamp_viewport();
    }

    /// Advances momentum by `dt_ms` milliseconds.
    ///
    /// Applies residual zoom and pan velocity to the transform, clamps, and
    /// decays both velocities by `momentum_decay`; a velocity whose
    /// magnitude falls below `velocity_epsilon` is zeroed. Returns `true`
    /// while the camera is still in motion, so callers know when to stop
    /// scheduling ticks (running the tick unconditionally every frame is
    /// also fine).
    ///
    /// Negative or non-finite durations are treated as zero elapsed time.
    /// Gesture state is never touched: a tick interleaved between two pan
    /// moves only advances offset and scale.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let frames = if dt_ms.is_finite() {
            dt_ms.max(0.0) / FRAME_MS
        } else {
            0.0
        };
        let eps = self.options.velocity_epsilon;
        let mut active = false;

        if self.zoom_velocity.abs() > eps {
            let target = self.scale + self.zoom_velocity * frames;
            self.scale = target.clamp(self.options.min_zoom, self.options.max_zoom);
            self.zoom_velocity *= self.options.momentum_decay;
            if self.zoom_velocity.abs() <= eps {
                self.zoom_velocity = 0.0;
            }
            active = true;
        }

        if self.pan_velocity.x.abs() > eps || self.pan_velocity.y.abs() > eps {
            self.offset += self.pan_velocity * frames;
            self.pan_velocity *= self.options.momentum_decay;
            if self.pan_velocity.x.abs() <= eps && self.pan_velocity.y.abs() <= eps {
                self.pan_velocity = Vec2::ZERO;
            }
            active = true;
        }

        if active {
            self.clamp_viewport();
        }
        active
    }

    /// Clamps scale and offset into their allowed ranges.
    ///
    /// The scale is clamped into `[min_zoom, max_zoom]`. When pan bounds
    /// are configured, the offset is clamped per axis so that the bounded
    /// world region (in screen space) stays within an overscroll padding of
    /// the screen origin. The padding is
    /// `max(min_bounds_padding, extent * bounds_factor * max(1, scale))`,
    /// so zooming in widens the reachable range instead of pinning the
    /// view. Clamping is idempotent.
    pub fn clamp_viewport(&mut self) {
        self.scale = self.scale.clamp(self.options.min_zoom, self.options.max_zoom);
        let Some(bounds) = self.pan_bounds else {
            return;
        };

        let zoom_pad = self.options.bounds_factor * self.scale.max(1.0);
        let pad_x = (bounds.width() * zoom_pad).max(self.options.min_bounds_padding);
        let pad_y = (bounds.height() * zoom_pad).max(self.options.min_bounds_padding);

        self.offset.x = self
            .offset
            .x
            .clamp(-pad_x - bounds.x1 * self.scale, pad_x - bounds.x0 * self.scale);
        self.offset.y = self
            .offset
            .y
            .clamp(-pad_y - bounds.y1 * self.scale, pad_y - bounds.y0 * self.scale);
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            offset: self.offset,
            scale: self.scale,
            is_dragging: self.is_dragging(),
            pan_velocity: self.pan_velocity,
            zoom_velocity: self.zoom_velocity,
            pan_bounds: self.pan_bounds,
        }
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current screen-space pan offset.
    pub offset: Vec2,
    /// Current uniform zoom factor.
    pub scale: f64,
    /// Whether a pan gesture is active.
    pub is_dragging: bool,
    /// Residual pan velocity.
    pub pan_velocity: Vec2,
    /// Residual zoom velocity.
    pub zoom_velocity: f64,
    /// Optional world-space pan bounds.
    pub pan_bounds: Option<Rect>,
}
