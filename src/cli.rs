// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use clap::{Args, Parser, ValueEnum};
use clap_num::maybe_hex;
use log::{debug, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::evaluate::report;
use crate::map::SignalMap;
use crate::reader::{DumpFile, I2cDump, RegisterReader};
use crate::{Error, Options, ReportFormat, Result, SerializeToYAML, DEFAULT_ADDRESS, DEFAULT_BUS};

/// Reports the health of every signal of the rack management controller
/// status CPLD.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
pub struct App {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    /// I2C bus number
    #[clap(default_value_t = DEFAULT_BUS, value_parser = maybe_hex::<u32>)]
    bus: u32,

    /// Device address, decimal or 0x-prefixed hex
    #[clap(default_value_t = DEFAULT_ADDRESS, value_parser = maybe_hex::<u8>)]
    address: u8,

    /// Decode a saved dump instead of reading the device ("-" for stdin)
    #[clap(long, short)]
    dump: Option<PathBuf>,

    /// Register dump tool
    #[clap(long, default_value = "i2cdump")]
    i2cdump: PathBuf,

    /// Print the active signal map as YAML and exit
    #[clap(long)]
    list_signals: bool,
}

#[derive(ValueEnum, Clone, Copy, Default, Debug)]
enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output file for the report (default: console)
    #[clap(long, short)]
    output: Option<PathBuf>,

    /// Signal map file (default: built-in RMC map)
    #[clap(long, short)]
    map: Option<PathBuf>,

    /// Report format
    #[clap(long, short, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// When to color status tags
    #[clap(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Append OK/FAIL/UNKNOWN counts to the text report
    #[clap(long)]
    summary: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn open_options(opts: &GlobalOpts) -> Result<Options<Box<dyn Write>>> {
    let writer: Box<dyn Write> = match opts.output {
        Some(ref path) => File::create(path)
            .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>)
            .map_err(|source| Error::Output {
                path: path.clone(),
                source,
            })?,
        None => Box::new(io::stdout()),
    };

    let mut options = Options::new(writer);
    options.format = opts.format;
    options.summary = opts.summary;
    options.color = match opts.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => opts.output.is_none() && io::stdout().is_terminal(),
    };

    Ok(options)
}

fn run(args: App) -> Result<()> {
    let map = match args.global_opts.map {
        Some(ref path) => SignalMap::load(path)?,
        None => SignalMap::builtin()?,
    };
    debug!("signal map has {} entries", map.len());

    if args.list_signals {
        let mut options = open_options(&args.global_opts)?;
        map.serialize_to_yaml(&mut options.writer)?;
        options.writer.flush()?;
        return Ok(());
    }

    let reader: Box<dyn RegisterReader> = match args.dump {
        Some(path) => Box::new(DumpFile::new(path)),
        None => Box::new(I2cDump::new(args.i2cdump)),
    };

    // the output file is created only after a successful read
    let text = reader.read(args.bus, args.address)?;
    let mut options = open_options(&args.global_opts)?;
    report(&text, args.bus, args.address, &map, &mut options)?;

    Ok(())
}

pub fn main() -> ExitCode {
    let args = App::parse();
    init_logging(args.global_opts.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
