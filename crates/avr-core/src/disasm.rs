//! Textual disassembly of a decoded [`Op`].
//!
//! Kept separate from [`crate::interp`] since formatting an instruction
//! and executing one touch completely different parts of an `Op`.

use crate::decode::{Instr, Op};

fn reg(n: u8) -> String {
    format!("r{n}")
}

/// Render the `X`/`Y`/`Z` pointer-register addressing mode encoded in
/// the low nibble of an LD/ST opcode.
fn pointer_mode(raw: u16) -> String {
    match raw & 0x000F {
        0x1 => "Z+".to_string(),
        0x2 => "-Z".to_string(),
        0x9 => "Y+".to_string(),
        0xA => "-Y".to_string(),
        0xC => "X".to_string(),
        0xD => "X+".to_string(),
        0xE => "-X".to_string(),
        _ => "Z".to_string(),
    }
}

/// Render `op` the way an assembler listing would, e.g. `"ldi r16, 0x05"`.
#[must_use]
pub fn format(op: &Op) -> String {
    use Instr::{
        Adc, Add, Adiw, And, Andi, Asr, Bclr, Bld, Brbc, Brbs, Break, Bset, Bst, Call, Cbi, Com,
        Cp, Cpc, Cpi, Cpse, Dec, Des, Eicall, Eijmp, Elpm, Eor, Fmul, Fmuls, Fmulsu, Icall, Ijmp,
        In, Inc, Jmp, Ld, Ldd, Ldi, Lds, Lpm, Lsr, Mov, Movw, Mul, Muls, Mulsu, Neg, Nop, Or, Ori,
        Out, Pop, Push, Rcall, Ret, Reti, Rjmp, Ror, Sbc, Sbci, Sbi, Sbic, Sbis, Sbiw, Sbrc, Sbrs,
        Sleep, Spm, St, Std, Sts, Sub, Subi, Swap, Undef, Wdr,
    };

    match op.instr {
        Undef => format!(".word 0x{:04X}", op.raw),
        Nop => "nop".to_string(),
        Movw => format!("movw {}, {}", reg(op.rd), reg(op.rr)),
        Muls => format!("muls {}, {}", reg(op.rd), reg(op.rr)),
        Mulsu => format!("mulsu {}, {}", reg(op.rd), reg(op.rr)),
        Fmul => format!("fmul {}, {}", reg(op.rd), reg(op.rr)),
        Fmuls => format!("fmuls {}, {}", reg(op.rd), reg(op.rr)),
        Fmulsu => format!("fmulsu {}, {}", reg(op.rd), reg(op.rr)),
        Cpc => format!("cpc {}, {}", reg(op.rd), reg(op.rr)),
        Sbc => format!("sbc {}, {}", reg(op.rd), reg(op.rr)),
        Add => format!("add {}, {}", reg(op.rd), reg(op.rr)),
        Cpse => format!("cpse {}, {}", reg(op.rd), reg(op.rr)),
        Cp => format!("cp {}, {}", reg(op.rd), reg(op.rr)),
        Sub => format!("sub {}, {}", reg(op.rd), reg(op.rr)),
        Adc => format!("adc {}, {}", reg(op.rd), reg(op.rr)),
        And => format!("and {}, {}", reg(op.rd), reg(op.rr)),
        Eor => format!("eor {}, {}", reg(op.rd), reg(op.rr)),
        Or => format!("or {}, {}", reg(op.rd), reg(op.rr)),
        Mov => format!("mov {}, {}", reg(op.rd), reg(op.rr)),
        Cpi => format!("cpi {}, 0x{:02X}", reg(op.rd), op.k),
        Sbci => format!("sbci {}, 0x{:02X}", reg(op.rd), op.k),
        Subi => format!("subi {}, 0x{:02X}", reg(op.rd), op.k),
        Ori => format!("ori {}, 0x{:02X}", reg(op.rd), op.k),
        Andi => format!("andi {}, 0x{:02X}", reg(op.rd), op.k),
        Ldi => format!("ldi {}, 0x{:02X}", reg(op.rd), op.k),
        Ldd => format!(
            "ldd {}, {}+{}",
            reg(op.rd),
            if op.raw & 0x0008 != 0 { "Y" } else { "Z" },
            op.q
        ),
        Std => format!(
            "std {}+{}, {}",
            if op.raw & 0x0008 != 0 { "Y" } else { "Z" },
            op.q,
            reg(op.rr)
        ),
        Lds => format!("lds {}, 0x{:04X}", reg(op.rd), op.k),
        Sts => format!("sts 0x{:04X}, {}", op.k, reg(op.rr)),
        Ld => format!("ld {}, {}", reg(op.rd), pointer_mode(op.raw)),
        St => format!("st {}, {}", pointer_mode(op.raw), reg(op.rr)),
        Lpm => format!("lpm {}, Z", reg(op.rd)),
        Elpm => format!("elpm {}, Z", reg(op.rd)),
        Pop => format!("pop {}", reg(op.rd)),
        Push => format!("push {}", reg(op.rr)),
        Com => format!("com {}", reg(op.rd)),
        Neg => format!("neg {}", reg(op.rd)),
        Swap => format!("swap {}", reg(op.rd)),
        Inc => format!("inc {}", reg(op.rd)),
        Asr => format!("asr {}", reg(op.rd)),
        Lsr => format!("lsr {}", reg(op.rd)),
        Ror => format!("ror {}", reg(op.rd)),
        Bset => format!("bset {}", op.s),
        Bclr => format!("bclr {}", op.s),
        Ret => "ret".to_string(),
        Reti => "reti".to_string(),
        Sleep => "sleep".to_string(),
        Break => "break".to_string(),
        Wdr => "wdr".to_string(),
        Spm => "spm".to_string(),
        Ijmp => "ijmp".to_string(),
        Eicall => "eicall".to_string(),
        Eijmp => "eijmp".to_string(),
        Icall => "icall".to_string(),
        Dec => format!("dec {}", reg(op.rd)),
        Des => format!("des 0x{:X}", op.k),
        Jmp => format!("jmp 0x{:06X}", op.k),
        Call => format!("call 0x{:06X}", op.k),
        Adiw => format!("adiw {}, 0x{:02X}", reg(op.rd), op.k),
        Sbiw => format!("sbiw {}, 0x{:02X}", reg(op.rd), op.k),
        Cbi => format!("cbi 0x{:02X}, {}", op.a, op.b),
        Sbic => format!("sbic 0x{:02X}, {}", op.a, op.b),
        Sbi => format!("sbi 0x{:02X}, {}", op.a, op.b),
        Sbis => format!("sbis 0x{:02X}, {}", op.a, op.b),
        Mul => format!("mul {}, {}", reg(op.rd), reg(op.rr)),
        In => format!("in {}, 0x{:02X}", reg(op.rd), op.a),
        Out => format!("out 0x{:02X}, {}", op.a, reg(op.rr)),
        Rjmp => format!("rjmp .{:+}", op.k),
        Rcall => format!("rcall .{:+}", op.k),
        Brbs => format!("brbs {}, .{:+}", op.s, op.k),
        Brbc => format!("brbc {}, .{:+}", op.s, op.k),
        Bld => format!("bld {}, {}", reg(op.rd), op.b),
        Bst => format!("bst {}, {}", reg(op.rd), op.b),
        Sbrc => format!("sbrc {}, {}", reg(op.rr), op.b),
        Sbrs => format!("sbrs {}, {}", reg(op.rr), op.b),
        _ => format!(".word 0x{:04X}", op.raw),
    }
}
