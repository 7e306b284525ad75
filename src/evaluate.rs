// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use itertools::Itertools;
use log::{debug, info};
use std::fmt::{self, Display, Formatter};
use std::io::Write;

use crate::dump::{parse_dump, RawByteTable};
use crate::map::SignalMap;
use crate::reader::RegisterReader;
use crate::report::write_report;
use crate::signal::{extract_bit, SignalEntry};
use crate::{Options, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Fail,
    /// The register was not in the dump.
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Fail => "FAIL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedSignal<'a> {
    pub entry: &'a SignalEntry,
    pub live: Option<u8>,
    pub status: Status,
}

pub fn evaluate_signal<'a>(entry: &'a SignalEntry, table: &RawByteTable) -> EvaluatedSignal<'a> {
    let live = table.get(entry.offset).map(|value| extract_bit(value, entry.bit));

    let status = match live {
        None => Status::Unknown,
        Some(bit) if bit == entry.expected => Status::Ok,
        Some(_) => Status::Fail,
    };

    EvaluatedSignal {
        entry,
        live,
        status,
    }
}

/// Evaluates every signal of `map`, in map order.
pub fn evaluate<'a>(map: &'a SignalMap, table: &RawByteTable) -> Vec<EvaluatedSignal<'a>> {
    map.iter().map(|entry| evaluate_signal(entry, table)).collect()
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub fail: usize,
    pub unknown: usize,
}

impl Summary {
    pub fn of(signals: &[EvaluatedSignal<'_>]) -> Self {
        let counts = signals.iter().map(|s| s.status).counts();
        let count = |status: Status| counts.get(&status).copied().unwrap_or(0);

        Self {
            ok: count(Status::Ok),
            fail: count(Status::Fail),
            unknown: count(Status::Unknown),
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.fail + self.unknown
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} signals: {} OK, {} FAIL, {} UNKNOWN",
            self.total(),
            self.ok,
            self.fail,
            self.unknown
        )
    }
}

/// Reads the device, decodes the dump and writes the report. Nothing is
/// written when the read fails.
pub fn check<R, W>(
    reader: &R,
    bus: u32,
    address: u8,
    map: &SignalMap,
    options: &mut Options<W>,
) -> Result<Summary>
where
    R: RegisterReader + ?Sized,
    W: Write,
{
    let text = reader.read(bus, address)?;
    report(&text, bus, address, map, options)
}

/// Decodes a dump already read from the device and writes the report.
pub fn report<W: Write>(
    text: &str,
    bus: u32,
    address: u8,
    map: &SignalMap,
    options: &mut Options<W>,
) -> Result<Summary> {
    let table = parse_dump(text);
    debug!("decoded {} register bytes", table.len());

    let signals = evaluate(map, &table);
    let summary = Summary::of(&signals);
    info!("bus {bus} address 0x{address:02x}: {summary}");

    write_report(&signals, &summary, options)?;

    Ok(summary)
}
