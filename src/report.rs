// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use clap::ValueEnum;
use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::evaluate::{EvaluatedSignal, Status, Summary};
use crate::{yaml_str, Options, SerializeToYAML};

/// Width of the signal name column. Longer names are truncated.
pub const NAME_WIDTH: usize = 32;

#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Yaml,
}

pub fn status_tag(status: Status, color: bool) -> String {
    let label = match status {
        Status::Ok => "  OK  ",
        Status::Fail => " FAIL ",
        Status::Unknown => " UNKN ",
    };

    if !color {
        return format!("[{label}]");
    }

    match status {
        Status::Ok => format!("[{}]", label.green().bold()),
        Status::Fail => format!("[{}]", label.red().bold()),
        Status::Unknown => format!("[{}]", label.yellow().bold()),
    }
}

pub fn format_line(signal: &EvaluatedSignal<'_>, color: bool) -> String {
    let live = match signal.live {
        Some(bit) => bit.to_string(),
        None => "?".to_string(),
    };

    format!(
        "{} {:<width$.width$} live={} expected={}",
        status_tag(signal.status, color),
        signal.entry.name,
        live,
        signal.entry.expected,
        width = NAME_WIDTH
    )
}

struct YamlReport<'r, 'a> {
    signals: &'r [EvaluatedSignal<'a>],
    summary: &'r Summary,
}

impl SerializeToYAML for YamlReport<'_, '_> {
    fn serialize_to_yaml_at_level<W: Write>(&self, level: usize, writer: &mut W) -> io::Result<()> {
        let indent = " ".repeat(level * 2);
        writeln!(writer, "{}signals:", indent)?;

        for signal in self.signals {
            writeln!(writer, "{}- offset: 0x{:02X}", indent, signal.entry.offset)?;
            writeln!(writer, "{}  bit: {}", indent, signal.entry.bit)?;
            writeln!(writer, "{}  name: {}", indent, yaml_str(&signal.entry.name))?;
            match signal.live {
                Some(bit) => writeln!(writer, "{}  live: {}", indent, bit)?,
                None => writeln!(writer, "{}  live: ~", indent)?,
            }
            writeln!(writer, "{}  expected: {}", indent, signal.entry.expected)?;
            writeln!(writer, "{}  status: {}", indent, signal.status)?;
        }

        writeln!(writer, "{}summary:", indent)?;
        writeln!(writer, "{}  ok: {}", indent, self.summary.ok)?;
        writeln!(writer, "{}  fail: {}", indent, self.summary.fail)?;
        writeln!(writer, "{}  unknown: {}", indent, self.summary.unknown)
    }
}

/// Writes one entry per signal in the order given.
pub fn write_report<W: Write>(
    signals: &[EvaluatedSignal<'_>],
    summary: &Summary,
    options: &mut Options<W>,
) -> io::Result<()> {
    match options.format {
        ReportFormat::Text => {
            for signal in signals {
                writeln!(options.writer, "{}", format_line(signal, options.color))?;
            }
            if options.summary {
                writeln!(options.writer, "{summary}")?;
            }
        }
        ReportFormat::Yaml => {
            writeln!(options.writer, "---")?;
            YamlReport { signals, summary }.serialize_to_yaml(&mut options.writer)?;
        }
    }

    options.writer.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signal::SignalEntry;

    #[test]
    fn test_plain_lines() {
        let ok = SignalEntry::new(0x00, 7, "wRPU_READY_PLD_R", 1).unwrap();
        let unknown = SignalEntry::new(0x20, 6, "LEAK_DETECT_DRIP_PAN_N_R", 1).unwrap();

        let line = format_line(
            &EvaluatedSignal {
                entry: &ok,
                live: Some(1),
                status: Status::Ok,
            },
            false,
        );
        assert_eq!(
            line,
            "[  OK  ] wRPU_READY_PLD_R                 live=1 expected=1"
        );

        let line = format_line(
            &EvaluatedSignal {
                entry: &unknown,
                live: None,
                status: Status::Unknown,
            },
            false,
        );
        assert_eq!(
            line,
            "[ UNKN ] LEAK_DETECT_DRIP_PAN_N_R         live=? expected=1"
        );
    }

    #[test]
    fn test_long_names_are_truncated() {
        let entry = SignalEntry::new(0x01, 0, "A".repeat(40), 0).unwrap();
        let line = format_line(
            &EvaluatedSignal {
                entry: &entry,
                live: Some(1),
                status: Status::Fail,
            },
            false,
        );
        assert_eq!(line, format!("[ FAIL ] {} live=1 expected=0", "A".repeat(NAME_WIDTH)));
    }

    #[test]
    fn test_colored_tag_keeps_label() {
        assert!(status_tag(Status::Fail, true).contains("FAIL"));
        assert_eq!(status_tag(Status::Fail, false), "[ FAIL ]");
    }
}
