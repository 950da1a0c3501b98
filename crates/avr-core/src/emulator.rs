//! Top-level emulator state.

use crate::cpu::{RunState, Sreg};
use crate::decode::{decode, Op};
use crate::device::DeviceProfile;
use crate::error::{Exception, LoadError};
use crate::flash::Flash;
use crate::hex::Chunk;
use crate::interp;
use crate::memory::DataMemory;

/// Owns flash, data memory, and CPU-visible state; `step` is the only
/// way time moves forward.
pub struct Emulator {
    pub flash: Flash,
    pub mem: DataMemory,
    pub sreg: Sreg,
    /// Program counter in words, not bytes.
    pub pc: u32,
    pub cycles: u64,
    pub state: RunState,
}

impl Emulator {
    /// Build an emulator for `device`, with `chunks` already uploaded
    /// into flash. Fails the same way [`Flash::upload`] does.
    pub fn new(device: &DeviceProfile, chunks: &[Chunk]) -> Result<Self, LoadError> {
        let mut flash = Flash::new(device.flashend);
        flash.upload(chunks)?;

        Ok(Self {
            flash,
            mem: DataMemory::new(device),
            sreg: Sreg::default(),
            pc: 0,
            cycles: 0,
            state: RunState::Normal,
        })
    }

    /// Decode and execute exactly one instruction at the current `pc`.
    ///
    /// On `Err`, `pc` still points at the faulting instruction — the
    /// caller decides whether to halt or continue.
    pub fn step(&mut self) -> Result<(), Exception> {
        let op = self.decode_current();
        interp::execute(self, &op)
    }

    /// Decode (without executing) the instruction at the current `pc`,
    /// for disassembly and the interactive core dump.
    #[must_use]
    pub fn decode_current(&self) -> Op {
        decode(&self.flash, self.pc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ATMEGA328P;

    fn chunk(bytes: &[u8]) -> Chunk {
        Chunk {
            base_address: 0,
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn new_rejects_an_empty_program() {
        assert!(matches!(
            Emulator::new(&ATMEGA328P, &[]).unwrap_err(),
            LoadError::Empty
        ));
    }

    #[test]
    fn step_advances_pc_by_one_word() {
        let mut emu = Emulator::new(&ATMEGA328P, &[chunk(&[0x00, 0x00])]).unwrap();
        assert_eq!(emu.pc, 0);
        emu.step().unwrap();
        assert_eq!(emu.pc, 1);
        assert_eq!(emu.cycles, 1);
    }

    #[test]
    fn stack_pointer_resets_to_ramend_on_init() {
        let emu = Emulator::new(&ATMEGA328P, &[chunk(&[0x00, 0x00])]).unwrap();
        assert_eq!(emu.mem.sp(), ATMEGA328P.ramend as u16);
    }
}
