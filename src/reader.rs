// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::Command;

use crate::{Error, Result};

/// Source of a textual register dump for a device on a bus.
pub trait RegisterReader {
    fn read(&self, bus: u32, address: u8) -> Result<String>;
}

/// Reads the device with `i2cdump` from i2c-tools.
#[derive(Debug, Clone)]
pub struct I2cDump {
    program: PathBuf,
}

impl Default for I2cDump {
    fn default() -> Self {
        Self::new("i2cdump")
    }
}

impl I2cDump {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(bus: u32, address: u8) -> [String; 4] {
        [
            "-f".to_string(),
            "-y".to_string(),
            bus.to_string(),
            format!("0x{address:02x}"),
        ]
    }

    fn command_line(&self, bus: u32, address: u8) -> String {
        let mut line = self.program.display().to_string();
        for arg in Self::args(bus, address) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

impl RegisterReader for I2cDump {
    fn read(&self, bus: u32, address: u8) -> Result<String> {
        let command_line = self.command_line(bus, address);
        info!("running {command_line}");

        let output = Command::new(&self.program)
            .args(Self::args(bus, address))
            .output()
            .map_err(|e| Error::ToolUnavailable {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = match output.status.code() {
                Some(code) => code.to_string(),
                None => "terminated by signal".to_string(),
            };
            return Err(Error::ReadFailure(failure_diagnostic(&stdout, &code, &stderr)));
        }

        debug!("{command_line} returned {} bytes", output.stdout.len());
        Ok(stdout.trim_end_matches(['\t', '\n', '\r']).to_string())
    }
}

fn failure_diagnostic(stdout: &str, code: &str, stderr: &str) -> String {
    format!(
        "{}\n- Error Code: {}\n- Error:\n{}",
        stdout.trim_end_matches(['\t', '\n', '\r']),
        code,
        stderr.trim_end_matches(['\t', '\n', '\r'])
    )
}

/// Replays a dump saved earlier, `-` meaning stdin. Bus and address are
/// ignored.
#[derive(Debug, Clone)]
pub struct DumpFile {
    path: PathBuf,
}

impl DumpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegisterReader for DumpFile {
    fn read(&self, bus: u32, address: u8) -> Result<String> {
        debug!(
            "reading saved dump {} for bus {bus} address 0x{address:02x}",
            self.path.display()
        );

        let result = if self.path.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map(|_| text)
        } else {
            fs::read_to_string(&self.path)
        };

        result.map_err(|e| Error::ReadFailure(format!("{}: {}", self.path.display(), e)))
    }
}
