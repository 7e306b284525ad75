// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use crate::signal::{BitIndex, RegisterOffset, SignalEntry, SignalKey};
use crate::{yaml_str, Error, Result, SerializeToYAML};

pub mod rmc;

/// On-disk representation of a signal map.
#[derive(Debug, Serialize, Deserialize)]
struct SignalMapFile {
    signals: Vec<SignalEntry>,
}

/// Association of physical bit positions with named signals.
///
/// Names are kept exactly as declared; several positions may share a name.
/// Two entries for the same position are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalMap {
    entries: BTreeMap<SignalKey, SignalEntry>,
}

impl SignalMap {
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SignalEntry>,
    {
        let mut map = BTreeMap::new();

        for entry in entries {
            entry.validate()?;
            match map.entry(entry.key()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                btree_map::Entry::Occupied(slot) => {
                    return Err(Error::SignalMapCollision {
                        key: entry.key(),
                        existing: slot.get().name.clone(),
                        duplicate: entry.name,
                    });
                }
            }
        }

        Ok(Self { entries: map })
    }

    /// The status CPLD map of the rack management controller.
    pub fn builtin() -> Result<Self> {
        Self::new(
            rmc::SIGNALS
                .iter()
                .map(|&(offset, bit, name, expected)| SignalEntry::new(offset, bit, name, expected))
                .collect::<Result<Vec<_>>>()?,
        )
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: SignalMapFile = serde_yaml::from_reader(reader)?;
        Self::new(file.signals)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::MapFile {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} signals from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn get(&self, offset: RegisterOffset, bit: BitIndex) -> Option<&SignalEntry> {
        self.entries.get(&SignalKey::new(offset, bit))
    }

    /// Entries in ascending `(offset, bit)` order.
    pub fn iter(&self) -> impl Iterator<Item = &SignalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SerializeToYAML for SignalMap {
    fn serialize_to_yaml_at_level<W: Write>(&self, level: usize, writer: &mut W) -> io::Result<()> {
        let indent = " ".repeat(level * 2);
        writeln!(writer, "{}signals:", indent)?;

        for entry in self.iter() {
            writeln!(writer, "{}- offset: 0x{:02X}", indent, entry.offset)?;
            writeln!(writer, "{}  bit: {}", indent, entry.bit)?;
            writeln!(writer, "{}  name: {}", indent, yaml_str(&entry.name))?;
            writeln!(writer, "{}  expected: {}", indent, entry.expected)?;
        }

        Ok(())
    }
}
