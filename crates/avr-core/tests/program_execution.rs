//! Integration coverage driven entirely through `avr-core`'s public API:
//! assemble an Intel HEX image by hand, load it, and step an `Emulator`
//! through a short program.

use avr_core::{decode_op, device_by_name, Exception, Instr};

/// Wrap `words` (little-endian) into a single Intel HEX data record
/// followed by an EOF record. Only exercised with small test programs,
/// so one record is always enough.
fn hex_from_words(words: &[u16]) -> String {
    let mut data = Vec::with_capacity(words.len() * 2);
    for w in words {
        data.extend_from_slice(&w.to_le_bytes());
    }

    let mut record = vec![data.len() as u8, 0x00, 0x00, 0x00];
    record.extend_from_slice(&data);
    let checksum = (!record.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))).wrapping_add(1);
    record.push(checksum);

    let mut text = String::from(':');
    for byte in record {
        text.push_str(&format!("{byte:02X}"));
    }
    text.push_str("\n:00000001FF\n");
    text
}

fn load_words(words: &[u16]) -> avr_core::Emulator {
    let text = hex_from_words(words);
    let chunks = avr_core::hex::parse(&text).expect("hex should parse");
    let device = device_by_name("ATmega328P").expect("ATmega328P is always known");
    avr_core::Emulator::new(device, &chunks).expect("emulator init")
}

#[test]
fn decoder_round_trips_through_the_public_api() {
    let flash = avr_core::flash::Flash::new(0x7FFF);
    let op = decode_op(&flash, 0);
    assert_eq!(op.instr, Instr::Nop);
}

#[test]
fn ldi_add_sts_lds_flow_through_data_memory() {
    // LDI r16, 5 ; LDI r17, 3 ; ADD r16, r17 ; STS 0x0200, r16 ; LDS r17, 0x0200
    let program = [0xE005u16, 0xE013, 0x0F01, 0x9300, 0x0200, 0x9110, 0x0200];
    let mut emu = load_words(&program);

    emu.step().unwrap(); // LDI r16, 5
    assert_eq!(emu.mem.read(16), 5);
    emu.step().unwrap(); // LDI r17, 3
    assert_eq!(emu.mem.read(17), 3);
    emu.step().unwrap(); // ADD r16, r17
    assert_eq!(emu.mem.read(16), 8);
    assert_eq!(emu.pc, 3);

    emu.step().unwrap(); // STS 0x0200, r16 (32-bit encoding, pc += 2)
    assert_eq!(emu.pc, 5);
    assert_eq!(emu.mem.read(0x0200), 8);

    emu.step().unwrap(); // LDS r17, 0x0200
    assert_eq!(emu.pc, 7);
    assert_eq!(emu.mem.read(17), 8);
}

#[test]
fn push_pop_round_trip_preserves_the_stack_pointer() {
    // LDI r16, 0x2A ; PUSH r16 ; LDI r16, 0 ; POP r16
    let program = [0xE20Au16, 0x930F, 0xE000, 0x910F];
    let mut emu = load_words(&program);
    let sp_start = emu.mem.sp();

    emu.step().unwrap(); // LDI r16, 0x2A
    emu.step().unwrap(); // PUSH r16
    assert_eq!(emu.mem.sp(), sp_start - 1);
    emu.step().unwrap(); // LDI r16, 0
    assert_eq!(emu.mem.read(16), 0);
    emu.step().unwrap(); // POP r16
    assert_eq!(emu.mem.read(16), 0x2A);
    assert_eq!(emu.mem.sp(), sp_start);
}

#[test]
fn dec_clears_zero_flag_on_nonzero_results_and_sets_it_at_zero() {
    // LDI r16, 1 ; DEC r16 ; DEC r16
    let program = [0xE001u16, 0x950A, 0x950A];
    let mut emu = load_words(&program);

    emu.step().unwrap(); // LDI r16, 1
    emu.step().unwrap(); // DEC r16 -> 0, Z set
    assert_eq!(emu.mem.read(16), 0);
    assert!(emu.sreg.zero());
    emu.step().unwrap(); // DEC r16 -> 0xFF, Z clear
    assert_eq!(emu.mem.read(16), 0xFF);
    assert!(!emu.sreg.zero());
}

#[test]
fn undefined_opcode_crashes_with_pc_left_at_the_fault() {
    let program = [0x0001u16]; // reserved row00 encoding, always Undef
    let mut emu = load_words(&program);
    let err = emu.step().unwrap_err();
    assert_eq!(err, Exception::Crash);
    assert_eq!(emu.pc, 0);
}

#[test]
fn lds_past_ramend_segfaults_instead_of_wrapping() {
    // LDS r16, 0x0900 (past ATmega328P's RAMEND of 0x08FF)
    let program = [0x9100u16, 0x0900];
    let mut emu = load_words(&program);
    let err = emu.step().unwrap_err();
    assert_eq!(err, Exception::Segfault);
}

#[test]
fn hex_checksum_mismatch_surfaces_as_a_parse_error() {
    let bad = ":10010000214601360121470136007EFE09D219014F"; // corrupted checksum
    let err = avr_core::hex::parse(bad).unwrap_err();
    assert!(matches!(
        err,
        avr_core::HexError::ChecksumMismatch { line: 1 }
    ));
}
