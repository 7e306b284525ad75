// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use log::{debug, trace};
use regex::Regex;
use std::collections::BTreeMap;

use crate::signal::RegisterOffset;

/// Number of byte columns in a dump row.
pub const ROW_WIDTH: usize = 16;

/// Register bytes recovered from a dump. Offsets that were never seen, or
/// whose token was malformed, are absent rather than zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawByteTable {
    bytes: BTreeMap<RegisterOffset, u8>,
}

impl RawByteTable {
    pub fn get(&self, offset: RegisterOffset) -> Option<u8> {
        self.bytes.get(&offset).copied()
    }

    pub fn contains(&self, offset: RegisterOffset) -> bool {
        self.bytes.contains_key(&offset)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Parses exactly two hex digits, either case.
pub fn parse_hex_byte(token: &str) -> Option<u8> {
    // from_str_radix would also take a leading sign
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

/// Decodes an `i2cdump` style listing:
///
/// ```text
///      0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f    0123456789abcdef
/// 00: 80 00 ff 00 00 00 00 00 00 00 00 00 00 00 00 00    ?.?.............
/// ```
///
/// Each row contributes the bytes after its base offset; the byte at column
/// `i` is stored at `base + i`.
pub fn parse_dump(text: &str) -> RawByteTable {
    let row_expr = Regex::new(
        r"(?xi)
        ^\s*
        ([0-9a-f]{2}):
        (?:\s+(.*))?
        $
    ",
    )
    .expect("regex");

    let mut table = RawByteTable::default();

    for (i, line) in text.lines().enumerate() {
        let Some(capture) = row_expr.captures(line) else {
            trace!("{i}: skipping {line:?}");
            continue;
        };

        let Some(base) = capture.get(1).and_then(|m| parse_hex_byte(m.as_str())) else {
            continue;
        };

        let Some(values) = capture.get(2) else {
            continue;
        };

        for (column, token) in values.as_str().split_whitespace().take(ROW_WIDTH).enumerate() {
            let Some(value) = parse_hex_byte(token) else {
                debug!("{i}: malformed byte {token:?} at column {column} of row 0x{base:02x}");
                continue;
            };

            let Ok(offset) = RegisterOffset::try_from(base as usize + column) else {
                debug!("{i}: row 0x{base:02x} runs past the register space");
                break;
            };

            table.bytes.insert(offset, value);
        }
    }

    table
}
