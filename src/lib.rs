// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::io::{self, Write};

pub mod cli;
pub mod dump;
pub mod error;
pub mod evaluate;
pub mod map;
pub mod reader;
pub mod report;
pub mod signal;

pub use error::{Error, Result};
pub use report::ReportFormat;

/// Default I2C bus of the RMC status CPLD.
pub const DEFAULT_BUS: u32 = 10;
/// Default 7-bit address of the RMC status CPLD.
pub const DEFAULT_ADDRESS: u8 = 0x23;

pub struct Options<W: Write> {
    pub writer: W,
    pub format: ReportFormat,
    pub color: bool,
    pub summary: bool,
}

impl<W: Write> Options<W> {
    /// Create a new `Options` object writing a plain text report.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            format: ReportFormat::Text,
            color: false,
            summary: false,
        }
    }
}

// serde_yaml doesn't provide a straightforward way to
// specify the representation of numeric fields. to
// get around this, just serialize manually.
pub trait SerializeToYAML {
    fn serialize_to_yaml<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.serialize_to_yaml_at_level(0, writer)
    }

    fn serialize_to_yaml_at_level<W: Write>(&self, level: usize, writer: &mut W)
        -> io::Result<()>;
}

/// Quotes a string the way serde_yaml would if it needs quoting.
pub(crate) fn yaml_str(s: &str) -> String {
    serde_yaml::to_string(s)
        .map(|y| y.trim().to_string())
        .unwrap_or_else(|_| format!("{s:?}"))
}
