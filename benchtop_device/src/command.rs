// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed command set and its mocked outcomes.

use serde::{Deserialize, Serialize};

use crate::kind::Capabilities;

/// Discriminant of a [`Command`], used in descriptors and capability
/// checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// Home all actuators.
    Home,
    /// Move to a mounting hole.
    MoveTo,
    /// Rotate to an absolute angle.
    Rotate,
    /// Capture a frame or reading.
    Capture,
    /// Set the sensor exposure time.
    SetExposure,
    /// Halt any motion in progress.
    Stop,
}

impl CommandKind {
    /// The capability a device must carry to accept this command.
    #[must_use]
    pub fn required_capability(self) -> Capabilities {
        match self {
            Self::Home => Capabilities::HOME,
            Self::MoveTo => Capabilities::MOVE,
            Self::Rotate => Capabilities::ROTATE,
            Self::Capture | Self::SetExposure => Capabilities::CAPTURE,
            // Stop is always safe to send to anything with actuators.
            Self::Stop => Capabilities::MOVE,
        }
    }

    /// The command's kebab-case wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::MoveTo => "move-to",
            Self::Rotate => "rotate",
            Self::Capture => "capture",
            Self::SetExposure => "set-exposure",
            Self::Stop => "stop",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A command with its parameters, as issued by the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    /// Home all actuators.
    Home,
    /// Move to the given 1-based mounting hole.
    MoveTo {
        /// Target column.
        i: i64,
        /// Target row.
        j: i64,
    },
    /// Rotate to an absolute angle in degrees.
    Rotate {
        /// Target angle, degrees CCW from +x.
        theta: f64,
    },
    /// Capture a frame or reading.
    Capture,
    /// Set the sensor exposure time.
    SetExposure {
        /// Exposure in milliseconds.
        ms: f64,
    },
    /// Halt any motion in progress.
    Stop,
}

impl Command {
    /// This command's discriminant.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Home => CommandKind::Home,
            Self::MoveTo { .. } => CommandKind::MoveTo,
            Self::Rotate { .. } => CommandKind::Rotate,
            Self::Capture => CommandKind::Capture,
            Self::SetExposure { .. } => CommandKind::SetExposure,
            Self::Stop => CommandKind::Stop,
        }
    }
}

/// Result of a mocked command dispatch.
///
/// There is no transport behind this: outcomes describe what the real
/// driver would have been asked to do, for UI feedback and tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// The accepted command.
    pub kind: CommandKind,
    /// Human-readable description of the mocked effect.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandKind};

    #[test]
    fn command_kinds_match_their_payloads() {
        assert_eq!(Command::Home.kind(), CommandKind::Home);
        assert_eq!(Command::MoveTo { i: 3, j: 4 }.kind(), CommandKind::MoveTo);
        assert_eq!(Command::SetExposure { ms: 16.0 }.kind(), CommandKind::SetExposure);
    }

    #[test]
    fn commands_serialize_with_a_tag() {
        let json = serde_json::to_string(&Command::MoveTo { i: 2, j: 5 }).unwrap();
        assert_eq!(json, r#"{"command":"move-to","i":2,"j":5}"#);
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Command::MoveTo { i: 2, j: 5 });
    }
}
