// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::{Error, Result};

/// Address of one byte in the device register space.
pub type RegisterOffset = u8;

/// Position of a flag within a register byte, bit 0 being the least
/// significant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BitIndex(u8);

impl BitIndex {
    pub const MAX: u8 = 7;

    pub fn new(bit: u8) -> Result<Self> {
        if bit > Self::MAX {
            return Err(Error::InvalidBitIndex(bit));
        }
        Ok(Self(bit))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All eight bit positions, least significant first.
    pub fn all() -> impl DoubleEndedIterator<Item = BitIndex> {
        (0..=Self::MAX).map(BitIndex)
    }
}

impl TryFrom<u8> for BitIndex {
    type Error = Error;

    fn try_from(bit: u8) -> Result<Self> {
        Self::new(bit)
    }
}

impl From<BitIndex> for u8 {
    fn from(bit: BitIndex) -> u8 {
        bit.0
    }
}

impl Display for BitIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts bit `bit` of `value`.
#[inline]
pub fn extract_bit(value: u8, bit: BitIndex) -> u8 {
    (value >> bit.get()) & 1
}

/// The physical position of a signal. Orders by offset, then bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignalKey {
    pub offset: RegisterOffset,
    pub bit: BitIndex,
}

impl SignalKey {
    pub fn new(offset: RegisterOffset, bit: BitIndex) -> Self {
        Self { offset, bit }
    }
}

impl Display for SignalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}[{}]", self.offset, self.bit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEntry {
    /// Map files write this as `0x`-prefixed hex, which serde_yaml reads
    /// as an integer.
    pub offset: RegisterOffset,
    pub bit: BitIndex,
    pub name: String,
    /// Bit value of the healthy state.
    pub expected: u8,
}

impl SignalEntry {
    pub fn new(offset: RegisterOffset, bit: u8, name: impl Into<String>, expected: u8) -> Result<Self> {
        let entry = Self {
            offset,
            bit: BitIndex::new(bit)?,
            name: name.into(),
            expected,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn key(&self) -> SignalKey {
        SignalKey::new(self.offset, self.bit)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.expected > 1 {
            return Err(Error::InvalidExpectedValue {
                name: self.name.clone(),
                value: self.expected,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bit_index_range() {
        assert_eq!(BitIndex::new(0).unwrap().get(), 0);
        assert_eq!(BitIndex::new(7).unwrap().get(), 7);
        assert!(matches!(BitIndex::new(8), Err(Error::InvalidBitIndex(8))));
        assert_eq!(BitIndex::all().count(), 8);
    }

    #[test]
    fn test_extract_bit() {
        let bit = |b| BitIndex::new(b).unwrap();

        assert_eq!(extract_bit(0x80, bit(7)), 1);
        assert_eq!(extract_bit(0x80, bit(6)), 0);
        assert_eq!(extract_bit(0x01, bit(0)), 1);
        assert_eq!(extract_bit(0xFE, bit(0)), 0);
        assert_eq!(extract_bit(0xA5, bit(5)), 1);
    }

    #[test]
    fn test_key_order() {
        let a = SignalKey::new(0x00, BitIndex::new(7).unwrap());
        let b = SignalKey::new(0x01, BitIndex::new(0).unwrap());
        let c = SignalKey::new(0x01, BitIndex::new(3).unwrap());

        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.to_string(), "0x01[3]");
    }

    #[test]
    fn test_entry_expected_value() {
        assert!(SignalEntry::new(0x10, 2, "LC_CABLE_DET_TRAY5_N_R", 0).is_ok());
        assert!(matches!(
            SignalEntry::new(0x10, 2, "LC_CABLE_DET_TRAY5_N_R", 2),
            Err(Error::InvalidExpectedValue { value: 2, .. })
        ));
    }

    #[test]
    fn test_entry_yaml() {
        let entry: SignalEntry =
            serde_yaml::from_str("offset: 0x1f\nbit: 3\nname: FOO_N\nexpected: 0\n").unwrap();
        assert_eq!(entry, SignalEntry::new(0x1F, 3, "FOO_N", 0).unwrap());

        let bad = serde_yaml::from_str::<SignalEntry>("offset: 0x1f\nbit: 9\nname: FOO\nexpected: 0\n")
            .unwrap_err();
        assert!(bad.to_string().contains("bit index 9 is out of range (0-7)"), "{bad}");
    }
}
