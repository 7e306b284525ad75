// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::io;
use std::path::PathBuf;

use crate::signal::SignalKey;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{reason}: {command}")]
    ToolUnavailable { command: String, reason: String },

    #[error("{0}")]
    ReadFailure(String),

    #[error("signal map collision at {key}: {existing:?} and {duplicate:?}")]
    SignalMapCollision {
        key: SignalKey,
        existing: String,
        duplicate: String,
    },

    #[error("bit index {0} is out of range (0-7)")]
    InvalidBitIndex(u8),

    #[error("expected value {value} for {name:?} must be 0 or 1")]
    InvalidExpectedValue { name: String, value: u8 },

    #[error("could not read signal map {path}: {source}")]
    MapFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid signal map: {0}")]
    MapFormat(#[from] serde_yaml::Error),

    #[error("could not open {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
