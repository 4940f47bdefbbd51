// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of device kinds and their capability flags.

use serde::{Deserialize, Serialize};

/// Kinds of optical-bench hardware the editor lays out.
///
/// This is a closed set: descriptors naming anything else fail validation
/// at load time instead of flowing through as untyped records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    /// Laser source.
    Laser,
    /// Fixed mirror.
    Mirror,
    /// Beam splitter.
    BeamSplitter,
    /// Imaging camera.
    Camera,
    /// Motorized translation stage.
    MotorStage,
    /// Photodetector.
    Detector,
}

impl DeviceKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Laser,
        Self::Mirror,
        Self::BeamSplitter,
        Self::Camera,
        Self::MotorStage,
        Self::Detector,
    ];

    /// The kind's kebab-case wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::Mirror => "mirror",
            Self::BeamSplitter => "beam-splitter",
            Self::Camera => "camera",
            Self::MotorStage => "motor-stage",
            Self::Detector => "detector",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Operations a device kind supports, interactively or via commands.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Can be moved on the grid.
        const MOVE      = 0b0000_0001;
        /// Can be rotated.
        const ROTATE    = 0b0000_0010;
        /// Footprint can be resized.
        const RESIZE    = 0b0000_0100;
        /// Can capture an image or reading.
        const CAPTURE   = 0b0000_1000;
        /// Can home its actuators.
        const HOME      = 0b0001_0000;
        /// Streams telemetry while idle.
        const TELEMETRY = 0b0010_0000;
    }
}

impl Capabilities {
    /// Parses a single descriptor capability name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "move" => Some(Self::MOVE),
            "rotate" => Some(Self::ROTATE),
            "resize" => Some(Self::RESIZE),
            "capture" => Some(Self::CAPTURE),
            "home" => Some(Self::HOME),
            "telemetry" => Some(Self::TELEMETRY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capabilities, DeviceKind};

    #[test]
    fn kinds_round_trip_through_their_wire_names() {
        for kind in DeviceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: DeviceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_kind_names_fail_to_parse() {
        assert!(serde_json::from_str::<DeviceKind>("\"flux-capacitor\"").is_err());
    }

    #[test]
    fn capability_names_parse_into_flags() {
        assert_eq!(Capabilities::parse("move"), Some(Capabilities::MOVE));
        assert_eq!(Capabilities::parse("telemetry"), Some(Capabilities::TELEMETRY));
        assert_eq!(Capabilities::parse("levitate"), None);
    }
}
