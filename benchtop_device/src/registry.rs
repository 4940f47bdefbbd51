// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated, enum-keyed device capability table.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use benchtop_placement::Footprint;

use crate::command::{Command, CommandKind, CommandOutcome};
use crate::error::Error;
use crate::kind::{Capabilities, DeviceKind};

/// Validated descriptor for one device kind.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSpec {
    kind: DeviceKind,
    footprint: Footprint,
    capabilities: Capabilities,
    commands: Vec<CommandKind>,
}

impl DeviceSpec {
    /// The kind this descriptor covers.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Default footprint for newly dropped devices of this kind.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// The kind's capability set.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Commands the kind accepts, in descriptor order.
    #[must_use]
    pub fn commands(&self) -> &[CommandKind] {
        &self.commands
    }

    /// Dispatches a command against this descriptor, mocked.
    ///
    /// Validates the command against the capability set and returns the
    /// outcome the real driver would have produced. No transport is
    /// involved.
    pub fn dispatch(&self, command: &Command) -> Result<CommandOutcome, Error> {
        let kind = command.kind();
        if !self.commands.contains(&kind) {
            return Err(Error::UnsupportedCommand {
                kind: self.kind,
                command: kind,
            });
        }
        let detail = match command {
            Command::Home => format!("{} homed", self.kind),
            Command::MoveTo { i, j } => format!("{} moved to hole ({i}, {j})", self.kind),
            Command::Rotate { theta } => format!("{} rotated to {theta} deg", self.kind),
            Command::Capture => format!("{} captured a frame", self.kind),
            Command::SetExposure { ms } => format!("{} exposure set to {ms} ms", self.kind),
            Command::Stop => format!("{} stopped", self.kind),
        };
        Ok(CommandOutcome { kind, detail })
    }
}

/// Unvalidated descriptor as read from a driver package's JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct RawDeviceSpec {
    /// Device kind the descriptor covers.
    pub kind: DeviceKind,
    /// Footprint width in holes.
    pub width: u32,
    /// Footprint height in holes.
    pub height: u32,
    /// Capability names from the closed set.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Commands the device accepts.
    #[serde(default)]
    pub commands: Vec<CommandKind>,
}

/// Registry of device descriptors, keyed by kind.
///
/// Built once at startup from driver-package descriptors and consulted by
/// the session layer for footprints, capability checks, and command
/// dispatch. Construction validates every descriptor; a registry never
/// holds a kind it cannot vouch for.
#[derive(Clone, Debug, Default)]
pub struct DeviceRegistry {
    specs: HashMap<DeviceKind, DeviceSpec>,
}

impl DeviceRegistry {
    /// Builds the registry from raw descriptors, validating each.
    ///
    /// Rejects duplicate kinds, zero-sized footprints, capability names
    /// outside the closed set, and commands the declared capabilities
    /// cannot carry out.
    pub fn from_raw(raw: impl IntoIterator<Item = RawDeviceSpec>) -> Result<Self, Error> {
        let mut specs = HashMap::new();
        for descriptor in raw {
            let kind = descriptor.kind;
            if specs.contains_key(&kind) {
                return Err(Error::DuplicateKind(kind));
            }
            if descriptor.width == 0 || descriptor.height == 0 {
                return Err(Error::ZeroFootprint(kind));
            }

            let mut capabilities = Capabilities::empty();
            for name in &descriptor.capabilities {
                let flag = Capabilities::parse(name).ok_or_else(|| Error::UnknownCapability {
                    kind,
                    name: name.clone(),
                })?;
                capabilities |= flag;
            }

            for &command in &descriptor.commands {
                if !capabilities.contains(command.required_capability()) {
                    return Err(Error::CommandOutsideCapabilities { kind, command });
                }
            }

            specs.insert(
                kind,
                DeviceSpec {
                    kind,
                    footprint: Footprint::new(descriptor.width, descriptor.height),
                    capabilities,
                    commands: descriptor.commands,
                },
            );
        }
        debug!(kinds = specs.len(), "device registry loaded");
        Ok(Self { specs })
    }

    /// Parses and validates a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: Vec<RawDeviceSpec> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Registry covering the built-in kinds with stock descriptors.
    #[must_use]
    pub fn builtin() -> Self {
        let stock = |kind, width, height, capabilities: &[&str], commands: Vec<CommandKind>| {
            RawDeviceSpec {
                kind,
                width,
                height,
                capabilities: capabilities.iter().map(|c| (*c).to_owned()).collect(),
                commands,
            }
        };
        let raw = vec![
            stock(DeviceKind::Laser, 2, 1, &["move", "rotate"], vec![
                CommandKind::MoveTo,
                CommandKind::Rotate,
                CommandKind::Stop,
            ]),
            stock(DeviceKind::Mirror, 1, 1, &["move", "rotate"], vec![
                CommandKind::Rotate,
            ]),
            stock(DeviceKind::BeamSplitter, 1, 1, &["move", "rotate"], vec![]),
            stock(
                DeviceKind::Camera,
                2,
                2,
                &["move", "capture", "telemetry"],
                vec![CommandKind::Capture, CommandKind::SetExposure],
            ),
            stock(
                DeviceKind::MotorStage,
                3,
                2,
                &["move", "rotate", "resize", "home", "telemetry"],
                vec![
                    CommandKind::Home,
                    CommandKind::MoveTo,
                    CommandKind::Rotate,
                    CommandKind::Stop,
                ],
            ),
            stock(DeviceKind::Detector, 1, 1, &["move", "capture"], vec![
                CommandKind::Capture,
            ]),
        ];
        // Stock descriptors are known-valid.
        match Self::from_raw(raw) {
            Ok(registry) => registry,
            Err(_) => Self::default(),
        }
    }

    /// Looks up the descriptor for a kind.
    #[must_use]
    pub fn spec(&self, kind: DeviceKind) -> Option<&DeviceSpec> {
        self.specs.get(&kind)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` when no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
