// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchtop Session: one open table, one camera, one drag at a time.
//!
//! A [`Session`] is the explicit context object that ties the engine crates
//! together for a single open table: the grid derived from the table
//! description, the momentum camera, the device records, and at most one
//! device drag in flight. There is no ambient global state — every
//! collaborator is owned by the session and sessions are fully isolated
//! from one another, so tests construct them freely.
//!
//! The UI layer talks to a session through a small event-shaped surface:
//! [`Session::on_pan_start`] / [`Session::on_pan_move`] /
//! [`Session::on_pan_end`] / [`Session::on_zoom`] / [`Session::on_tick`]
//! for canvas navigation, and the `*_device_drag` methods for moving
//! hardware. Screen-to-world conversion happens inside the session via the
//! camera, so callers only ever hand over raw pointer coordinates.
//!
//! ```rust
//! use benchtop_device::{DeviceKind, DeviceRegistry};
//! use benchtop_session::Session;
//! use kurbo::Point;
//!
//! let mut session = Session::new(DeviceRegistry::builtin());
//!
//! // Drop a mirror near a hole and drag it elsewhere.
//! session.add_device("m1", DeviceKind::Mirror, Point::new(37.0, 12.0)).unwrap();
//! session.begin_device_drag("m1", Point::new(25.0, 0.0)).unwrap();
//! let record = session.end_device_drag(Point::new(120.0, 80.0)).unwrap();
//! assert_eq!((record.hole_pose.i, record.hole_pose.j), (6, 4));
//! ```

use kurbo::Point;
use thiserror::Error;
use tracing::debug;

use benchtop_camera::Camera;
use benchtop_device::{
    Capabilities, Command, CommandOutcome, DeviceKind, DeviceRecord, DeviceRegistry, TableSpec,
};
use benchtop_grid::GridConfig;
use benchtop_placement::{DragInteraction, Footprint, resolve_placement, snap_theta};

/// Errors surfaced by session-level device operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The registry has no descriptor for the requested kind.
    #[error("no descriptor registered for device kind `{0}`")]
    UnknownKind(DeviceKind),

    /// No device with the given id exists in this session.
    #[error("no device with id `{0}`")]
    UnknownDevice(String),

    /// A device id is already taken.
    #[error("device id `{0}` already exists")]
    DuplicateDevice(String),

    /// The device is locked, or its kind lacks the capability for the
    /// requested operation.
    #[error("device `{0}` is locked or does not permit this operation")]
    NotPermitted(String),

    /// A drag-end or preview was requested with no drag in flight.
    #[error("no device drag is active")]
    NoActiveDrag,

    /// A second drag was started while one is in flight.
    #[error("a device drag is already active")]
    DragInProgress,

    /// Command dispatch failed validation.
    #[error(transparent)]
    Device(#[from] benchtop_device::Error),
}

/// The editing context for one open table.
///
/// Owns the navigation state and the dragged device's pose exclusively;
/// multi-window and multi-user sharing is out of scope.
#[derive(Debug)]
pub struct Session {
    registry: DeviceRegistry,
    grid: GridConfig,
    camera: Camera,
    devices: Vec<DeviceRecord>,
    drag: DragInteraction,
    drag_device: Option<String>,
}

impl Session {
    /// Creates a session over a stock table (default pitch, counts, and
    /// margin) with an idle camera.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        let grid = GridConfig::new(GridConfig::FALLBACK_PITCH, Point::ZERO);
        let mut camera = Camera::default();
        camera.set_pan_bounds(Some(grid.border_bounds()));
        Self {
            registry,
            grid,
            camera,
            devices: Vec::new(),
            drag: DragInteraction::default(),
            drag_device: None,
        }
    }

    /// Replaces the active table.
    ///
    /// Rebuilds the grid from the description, resets the camera (options
    /// are kept, transform and momentum are not), re-derives the camera's
    /// pan bounds from the new table border, and abandons any drag in
    /// flight. Device records are left alone; callers replace them
    /// separately when a different project is opened.
    pub fn load_table(&mut self, table: &TableSpec) {
        self.grid = table.grid();
        self.camera = Camera::new(*self.camera.options());
        self.camera.set_pan_bounds(Some(self.grid.border_bounds()));
        self.drag.cancel();
        self.drag_device = None;
        debug!(
            nx = self.grid.nx(),
            ny = self.grid.ny(),
            pitch = self.grid.pitch(),
            "table loaded, camera reset"
        );
    }

    /// The active grid.
    #[must_use]
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The session camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// All device records, in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    /// Looks up a device record by id.
    #[must_use]
    pub fn device(&self, id: &str) -> Option<&DeviceRecord> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Replaces the device list, e.g. when a project is opened.
    pub fn set_devices(&mut self, devices: Vec<DeviceRecord>) {
        self.drag.cancel();
        self.drag_device = None;
        self.devices = devices;
    }

    // Canvas navigation. These forward to the camera one-to-one so the UI
    // layer never needs a direct camera reference.

    /// Pointer-down on the canvas background: begins a pan gesture.
    pub fn on_pan_start(&mut self, x: f64, y: f64) {
        self.camera.begin_pan(Point::new(x, y));
    }

    /// Pointer-move during a pan gesture.
    pub fn on_pan_move(&mut self, x: f64, y: f64) {
        self.camera.pan_to(Point::new(x, y));
    }

    /// Pointer-up: ends the pan gesture, leaving momentum to glide.
    pub fn on_pan_end(&mut self) {
        self.camera.end_pan();
    }

    /// Wheel input at a screen position.
    pub fn on_zoom(&mut self, x: f64, y: f64, wheel_delta: f64) {
        self.camera.zoom_about(Point::new(x, y), wheel_delta);
    }

    /// Fixed-rate momentum tick; returns `true` while the camera is still
    /// in motion.
    pub fn on_tick(&mut self, dt_ms: f64) -> bool {
        self.camera.tick(dt_ms)
    }

    // Device placement.

    /// Drops a new device onto the canvas at a screen position.
    ///
    /// The footprint comes from the registry descriptor; the drop position
    /// is resolved through the camera and the footprint-clamped snap, so
    /// the new record is always grid-valid.
    pub fn add_device(
        &mut self,
        id: impl Into<String>,
        kind: DeviceKind,
        screen: Point,
    ) -> Result<&DeviceRecord, SessionError> {
        let id = id.into();
        if self.device(&id).is_some() {
            return Err(SessionError::DuplicateDevice(id));
        }
        let spec = self
            .registry
            .spec(kind)
            .ok_or(SessionError::UnknownKind(kind))?;
        let world = self.camera.screen_to_world(screen);
        let placement = resolve_placement(world, spec.footprint(), 0.0, &self.grid);
        let index = self.devices.len();
        self.devices
            .push(DeviceRecord::new(id, kind, placement, spec.footprint()));
        Ok(&self.devices[index])
    }

    /// Removes a device by id, cancelling its drag if one is active.
    pub fn remove_device(&mut self, id: &str) -> Result<DeviceRecord, SessionError> {
        let index = self
            .devices
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| SessionError::UnknownDevice(id.to_owned()))?;
        if self.drag_device.as_deref() == Some(id) {
            self.drag.cancel();
            self.drag_device = None;
        }
        Ok(self.devices.remove(index))
    }

    /// Begins dragging a device from a screen position.
    ///
    /// Locked devices and kinds without the `MOVE` capability reject the
    /// drag; no resolver computation occurs for them.
    pub fn begin_device_drag(&mut self, id: &str, _screen: Point) -> Result<(), SessionError> {
        if self.drag.is_active() {
            return Err(SessionError::DragInProgress);
        }
        let record = self
            .device(id)
            .ok_or_else(|| SessionError::UnknownDevice(id.to_owned()))?;
        let movable = self
            .registry
            .spec(record.kind)
            .is_some_and(|spec| spec.capabilities().contains(Capabilities::MOVE));
        if !movable || !self.drag.begin(record.drag_target()) {
            return Err(SessionError::NotPermitted(id.to_owned()));
        }
        self.drag_device = Some(id.to_owned());
        Ok(())
    }

    /// Live snap preview for the active drag at a screen position.
    ///
    /// Nearest-hole feedback in world coordinates, without the footprint
    /// clamp applied at commit time. `None` when no drag is active.
    #[must_use]
    pub fn drag_preview(&self, screen: Point) -> Option<Point> {
        self.drag
            .preview(&self.grid, self.camera.screen_to_world(screen))
    }

    /// Commits the active drag at a screen position and writes the
    /// resolved pose pair back to the device record.
    pub fn end_device_drag(&mut self, screen: Point) -> Result<&DeviceRecord, SessionError> {
        let id = self.drag_device.take().ok_or(SessionError::NoActiveDrag)?;
        let world = self.camera.screen_to_world(screen);
        let placement = self
            .drag
            .commit(&self.grid, world)
            .ok_or(SessionError::NoActiveDrag)?;
        let record = self
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(SessionError::UnknownDevice(id))?;
        record.apply_placement(placement);
        Ok(record)
    }

    /// Abandons the active drag, leaving the device record untouched.
    pub fn cancel_device_drag(&mut self) {
        self.drag.cancel();
        self.drag_device = None;
    }

    /// Rotates a device in place, optionally snapping to an angle step.
    ///
    /// Rotation is independent of grid snapping: the mounting hole does not
    /// change. Locked devices and kinds without the `ROTATE` capability are
    /// rejected.
    pub fn rotate_device(
        &mut self,
        id: &str,
        theta: f64,
        angle_step: Option<f64>,
    ) -> Result<(), SessionError> {
        let record = self.mutable_device(id, Capabilities::ROTATE)?;
        let theta = match angle_step {
            Some(step) => snap_theta(theta, step),
            None => theta,
        };
        record.pose.theta = theta;
        record.hole_pose.theta = theta;
        Ok(())
    }

    /// Resizes a device's footprint in place.
    ///
    /// The mounting hole is kept; like every non-drag mutation path, this
    /// does not re-clamp the footprint against the table edge — only a drag
    /// commit enforces containment. Locked devices and kinds without the
    /// `RESIZE` capability are rejected.
    pub fn resize_device(&mut self, id: &str, size: Footprint) -> Result<(), SessionError> {
        let record = self.mutable_device(id, Capabilities::RESIZE)?;
        record.size = size;
        Ok(())
    }

    /// Looks up a device for an interactive mutation, enforcing the lock
    /// flag and the required capability.
    fn mutable_device(
        &mut self,
        id: &str,
        required: Capabilities,
    ) -> Result<&mut DeviceRecord, SessionError> {
        let allowed = self
            .device(id)
            .ok_or_else(|| SessionError::UnknownDevice(id.to_owned()))
            .map(|record| {
                !record.locked
                    && self
                        .registry
                        .spec(record.kind)
                        .is_some_and(|spec| spec.capabilities().contains(required))
            })?;
        if !allowed {
            return Err(SessionError::NotPermitted(id.to_owned()));
        }
        self.devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| SessionError::UnknownDevice(id.to_owned()))
    }

    /// Id of the device currently being dragged, if any.
    #[must_use]
    pub fn dragging_device(&self) -> Option<&str> {
        self.drag_device.as_deref()
    }

    /// Dispatches a mocked command to a device.
    pub fn dispatch(&self, id: &str, command: &Command) -> Result<CommandOutcome, SessionError> {
        let record = self
            .device(id)
            .ok_or_else(|| SessionError::UnknownDevice(id.to_owned()))?;
        let spec = self
            .registry
            .spec(record.kind)
            .ok_or(SessionError::UnknownKind(record.kind))?;
        Ok(spec.dispatch(command)?)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use benchtop_device::{DeviceKind, DeviceRegistry};

    use super::{Session, SessionError};

    #[test]
    fn add_device_rejects_duplicate_ids() {
        let mut session = Session::new(DeviceRegistry::builtin());
        session
            .add_device("m1", DeviceKind::Mirror, Point::ZERO)
            .unwrap();
        assert!(matches!(
            session.add_device("m1", DeviceKind::Laser, Point::ZERO),
            Err(SessionError::DuplicateDevice(_))
        ));
    }

    #[test]
    fn remove_device_cancels_its_drag() {
        let mut session = Session::new(DeviceRegistry::builtin());
        session
            .add_device("m1", DeviceKind::Mirror, Point::ZERO)
            .unwrap();
        session.begin_device_drag("m1", Point::ZERO).unwrap();
        session.remove_device("m1").unwrap();
        assert_eq!(session.dragging_device(), None);
        assert!(matches!(
            session.end_device_drag(Point::ZERO),
            Err(SessionError::NoActiveDrag)
        ));
    }
}
