// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use rmcstat::evaluate::check;
use rmcstat::map::SignalMap;
use rmcstat::reader::DumpFile;
use rmcstat::signal::BitIndex;
use rmcstat::{Error, Options, SerializeToYAML};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_load_map_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "signals:
- offset: 0x21
  bit: 7
  name: LEAK_DETECT_DRIP_PAN_N_R
  expected: 1
- offset: 0x20
  bit: 6
  name: LEAK_DETECT_DRIP_PAN_N_R
  expected: 1
- offset: 0x00
  bit: 0
  name: \"quoted: name\"
  expected: 0
"
    )
    .unwrap();

    let map = SignalMap::load(file.path()).unwrap();
    assert_eq!(map.len(), 3);

    let offsets: Vec<u8> = map.iter().map(|e| e.offset).collect();
    assert_eq!(offsets, vec![0x00, 0x20, 0x21]);
    assert_eq!(
        map.get(0x00, BitIndex::new(0).unwrap()).unwrap().name,
        "quoted: name"
    );
}

#[test]
fn test_listed_map_reloads() {
    let map = SignalMap::builtin().unwrap();

    let mut file = NamedTempFile::new().unwrap();
    map.serialize_to_yaml(&mut file).unwrap();
    file.flush().unwrap();

    assert_eq!(SignalMap::load(file.path()).unwrap(), map);
}

#[test]
fn test_missing_map_file() {
    match SignalMap::load(std::path::Path::new("/nonexistent/signals.yaml")) {
        Err(Error::MapFile { path, .. }) => assert!(path.ends_with("signals.yaml")),
        other => panic!("Expected MapFile, got {other:?}"),
    }
}

#[test]
fn test_bad_bit_in_map_file() {
    let yaml = "signals:\n- offset: 0x00\n  bit: 8\n  name: X\n  expected: 1\n";
    match SignalMap::from_reader(yaml.as_bytes()) {
        Err(e @ Error::MapFormat(_)) => {
            assert!(e.to_string().contains("bit index 8 is out of range (0-7)"), "{e}")
        }
        other => panic!("Expected MapFormat, got {other:?}"),
    }
}

#[test]
fn test_bad_expected_in_map_file() {
    let yaml = "signals:\n- offset: 0x00\n  bit: 1\n  name: X\n  expected: 2\n";
    assert!(matches!(
        SignalMap::from_reader(yaml.as_bytes()),
        Err(Error::InvalidExpectedValue { value: 2, .. })
    ));
}

#[test]
fn test_saved_dump() {
    let mut dump = NamedTempFile::new().unwrap();
    write!(
        dump,
        "     0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f    0123456789abcdef
00: b0 fe c3 00 00 00 00 00 00 00 00 00 00 00 00 00    ???.............
10: 00 1f e7 00 01 7f 9f 00 00 00 00 00 00 00 00 00    .???.??.........
20: f0 c0 00 00 00 00 00 00 00 00 00 00 00 00 00 00    ??..............
"
    )
    .unwrap();

    let map = SignalMap::builtin().unwrap();
    let mut options = Options::new(Cursor::new(Vec::new()));
    let summary = check(&DumpFile::new(dump.path()), 10, 0x23, &map, &mut options).unwrap();

    assert_eq!(summary.unknown, 0);
    assert_eq!(summary.fail, 2);
    assert_eq!(summary.total(), map.len());

    let output = String::from_utf8(options.writer.into_inner()).unwrap();
    let failed: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("[ FAIL ]"))
        .map(|l| l[9..9 + 32].trim_end())
        .collect();
    assert_eq!(failed, vec!["wRPU_READY_SPARE_PLD_R", "DRIP_PAN_LEAK_SNS1_PRSNT_N_R"]);
}
