// Copyright 2026 the Benchtop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for descriptor loading, validation, and command dispatch.

use thiserror::Error;

use crate::command::CommandKind;
use crate::kind::DeviceKind;

/// Errors produced while loading or validating device descriptors, or
/// while dispatching a command against a device's capability set.
#[derive(Debug, Error)]
pub enum Error {
    /// A descriptor document failed to parse as JSON.
    #[error("malformed descriptor document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two descriptors claimed the same device kind.
    #[error("duplicate descriptor for device kind `{0}`")]
    DuplicateKind(DeviceKind),

    /// A descriptor named a capability outside the closed set.
    #[error("unknown capability `{name}` in descriptor for `{kind}`")]
    UnknownCapability {
        /// Kind whose descriptor carried the capability.
        kind: DeviceKind,
        /// The unrecognized capability name.
        name: String,
    },

    /// A descriptor declared a zero-sized footprint.
    #[error("descriptor for `{0}` declares a zero-sized footprint")]
    ZeroFootprint(DeviceKind),

    /// A descriptor listed a command its capability set cannot carry out.
    #[error("descriptor for `{kind}` lists command `{command}` outside its capabilities")]
    CommandOutsideCapabilities {
        /// Kind whose descriptor carried the command.
        kind: DeviceKind,
        /// The out-of-capability command.
        command: CommandKind,
    },

    /// A command was dispatched to a device that does not support it.
    #[error("device kind `{kind}` does not support command `{command}`")]
    UnsupportedCommand {
        /// Kind the command was dispatched to.
        kind: DeviceKind,
        /// The rejected command.
        command: CommandKind,
    },
}
