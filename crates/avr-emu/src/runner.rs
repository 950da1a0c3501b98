//! Fetch-decode-execute loop plus the interactive core dump.

use crate::cli::Config;
use avr_core::device::DeviceProfile;
use avr_core::disasm;
use avr_core::{device_by_name, Emulator};
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit codes: clean halt is 0, a CPU exception is 1, a
/// load/device error is 2.
pub const EXIT_OK: i32 = 0;
pub const EXIT_CRASH: i32 = 1;
pub const EXIT_LOAD_ERROR: i32 = 2;

pub fn run(config: &Config) -> i32 {
    let device = match device_by_name(&config.mcu) {
        Some(d) => d,
        None => {
            log::error!("{}", avr_core::LoadError::UnknownDevice(config.mcu.clone()));
            return EXIT_LOAD_ERROR;
        }
    };

    let is_elf = config
        .file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("elf"));
    if is_elf {
        log::error!("{}", avr_core::LoadError::UnsupportedElf);
        return EXIT_LOAD_ERROR;
    }

    let chunks = match avr_core::hex::load(&config.file) {
        Ok(c) => c,
        Err(err) => {
            log::error!("{err}");
            return EXIT_LOAD_ERROR;
        }
    };

    let mut emu = match Emulator::new(device, &chunks) {
        Ok(e) => e,
        Err(err) => {
            log::error!("{err}");
            return EXIT_LOAD_ERROR;
        }
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    if let Err(err) = ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    }) {
        log::warn!("could not install Ctrl-C handler: {err}");
    }

    let mut steps: u64 = 0;
    loop {
        if shutdown.load(Ordering::SeqCst) {
            log::info!("interrupted after {steps} instructions");
            print_core_dump(&emu, device);
            return EXIT_OK;
        }

        if let Some(max) = config.max_steps {
            if steps >= max {
                break;
            }
        }

        if config.debug {
            let op = emu.decode_current();
            println!("{:06X}: {}", emu.pc * 2, disasm::format(&op));
        }

        match emu.step() {
            Ok(()) => {}
            Err(exception) => {
                log::error!("{exception} at 0x{:06X}", emu.pc * 2);
                print_core_dump(&emu, device);
                return EXIT_CRASH;
            }
        }

        steps += 1;
    }

    print_core_dump(&emu, device);
    EXIT_OK
}

/// Registers `[0, 32)`, the I/O space (with the SPL/SPH bytes
/// highlighted), and the first SRAM page.
fn print_core_dump(emu: &avr_core::Emulator, device: &DeviceProfile) {
    println!("{}", "-- registers --".bold());
    for row in 0u32..4 {
        print!("r{:<2}: ", row * 8);
        for col in 0u32..8 {
            let n = row * 8 + col;
            print!("{:02X} ", emu.mem.read(n));
        }
        println!();
    }

    println!("pc=0x{:06X} sp=0x{:04X} sreg={:08b}", emu.pc * 2, emu.mem.sp(), emu.sreg.to_byte());
    println!(
        "{} signature={:02X}{:02X}{:02X} fuse={:02X}{:02X}{:02X} e2end=0x{:04X}",
        device.name,
        device.signature[0],
        device.signature[1],
        device.signature[2],
        device.fuse[0],
        device.fuse[1],
        device.fuse[2],
        device.e2end
    );

    println!("{}", "-- i/o space (includes SPL/SPH) --".bold());
    dump_page(emu, 0x0020, 4);

    println!("{}", "-- sram (first page) --".bold());
    dump_page(emu, emu.mem.ramstart_addr(), 4);
}

fn dump_page(emu: &avr_core::Emulator, base: u32, rows: u32) {
    for row in 0..rows {
        print!("{:04X}: ", base + row * 16);
        for col in 0..16 {
            let addr = base + row * 16 + col;
            let byte = emu.mem.read(addr);
            let cell = format!("{byte:02X}");
            if addr == 0x5D || addr == 0x5E {
                print!("{} ", cell.red().bold());
            } else {
                print!("{cell} ");
            }
        }
        println!();
    }
}
