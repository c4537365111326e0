//! Instruction builders
//!
//! One pure function per instruction intent. Each starts from the zero word
//! and sets only the fields its intent uses; addresses and ports are masked,
//! never rejected.

use crate::bytecode::codes::{Bus, Direction, GateType, IoPort};
use crate::bytecode::word::InstructionWord;

use super::address::GridAddress;

fn addressed(address: GridAddress) -> InstructionWord {
    InstructionWord::zero()
        .with_sel_col(address.col())
        .with_sel_row(address.row())
}

/// Reset the unit at (`col`, `row`), clearing its gate, I/O and routing state.
pub fn build_reset(col: u8, row: u8) -> InstructionWord {
    addressed(GridAddress::masked(col, row)).with_rst(1)
}

/// Select the gate variant of a unit.
///
/// The unit should already be reset; the word does not check that.
pub fn build_gate_type(col: u8, row: u8, gate: GateType) -> InstructionWord {
    addressed(GridAddress::masked(col, row))
        .with_set_gate_type(1)
        .with_sel_gate_type(gate.code())
}

/// Mark `port` as an input or an output and commit it (`perf`).
pub fn build_io_config(col: u8, row: u8, port: IoPort, is_input: bool) -> InstructionWord {
    let word = addressed(GridAddress::masked(col, row))
        .with_iosel(port.code())
        .with_perf(1);
    match Direction::from_is_input(is_input) {
        Direction::Input => word.with_min(1).with_mout(0),
        Direction::Output => word.with_mout(1).with_min(0),
    }
}

/// Route `port` onto internal bus A or B and commit it (`perf`).
///
/// `perf` is the same bit `build_io_config` sets; consumers tell the two
/// apart by `abio` versus `min`/`mout`.
pub fn build_bus_route(col: u8, row: u8, port: IoPort, to_bus_b: bool) -> InstructionWord {
    addressed(GridAddress::masked(col, row))
        .with_iosel(port.code())
        .with_abio(Bus::from_bus_b(to_bus_b).code())
        .with_perf(1)
}
