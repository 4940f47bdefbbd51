// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchtop Device: the typed boundary between the layout engine and the
//! project store / driver packages.
//!
//! The surrounding application persists projects as JSON and describes
//! hardware through per-device driver descriptors. This crate gives both a
//! closed, validated shape on the Rust side:
//!
//! - [`DeviceKind`]: the closed set of device kinds the editor lays out.
//! - [`Capabilities`]: what interactive operations and commands a kind
//!   supports.
//! - [`DeviceRegistry`]: an enum-keyed capability table built from JSON
//!   descriptors and validated at load time — loosely-typed descriptor
//!   records never flow past this crate.
//! - [`DeviceRecord`] and [`TableSpec`]: the plain-data records exchanged
//!   with the external persistence layer.
//! - [`Command`] and [`DeviceSpec::dispatch`]: a mocked command path; the
//!   real transport (serial, vendor SDKs) lives in external driver
//!   packages and is out of scope here.
//!
//! ## Minimal example
//!
//! ```rust
//! use benchtop_device::{Command, DeviceKind, DeviceRegistry};
//!
//! let registry = DeviceRegistry::builtin();
//! let stage = registry.spec(DeviceKind::MotorStage).unwrap();
//!
//! // Motor stages home; cameras do not.
//! assert!(stage.dispatch(&Command::Home).is_ok());
//! let camera = registry.spec(DeviceKind::Camera).unwrap();
//! assert!(camera.dispatch(&Command::Home).is_err());
//! ```
//!
//! This crate requires `std` (it owns the JSON/validation boundary).

mod command;
mod error;
mod kind;
mod record;
mod registry;
mod table;

pub use command::{Command, CommandKind, CommandOutcome};
pub use error::Error;
pub use kind::{Capabilities, DeviceKind};
pub use record::DeviceRecord;
pub use registry::{DeviceRegistry, DeviceSpec, RawDeviceSpec};
pub use table::TableSpec;
