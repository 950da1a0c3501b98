//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "avr-emu", version, about = "Interpreting emulator for the AVR ATmega328P")]
pub struct Args {
    /// Intel HEX program image to load.
    pub file: PathBuf,

    /// Target MCU device.
    #[arg(short = 'm', long, default_value = "ATmega328P")]
    pub mcu: String,

    /// Print an instruction trace as execution proceeds.
    #[arg(short, long)]
    pub debug: bool,

    /// Increase log verbosity (info/debug/trace on repeated use).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Stop after this many instructions, even if the program keeps running.
    #[arg(long)]
    pub max_steps: Option<u64>,
}

/// Run-loop configuration derived from [`Args`], mirroring the
/// `RunnerConfig` split between CLI parsing and what the run loop
/// actually reads.
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub mcu: String,
    pub debug: bool,
    pub max_steps: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            file: args.file,
            mcu: args.mcu,
            debug: args.debug,
            max_steps: args.max_steps,
        }
    }
}

pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
