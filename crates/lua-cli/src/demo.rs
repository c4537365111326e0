//! Default configuration for the 4x4 array.
//!
//! Resets every unit, then makes (0, 0) an AND gate fed by ports A and B with
//! D as output, and makes (0, 1) a pass-through from A to C.

use lua_core::{Bus, Direction, GateType, GridAddress, IoPort, Program, Step};

pub const DEFAULT_IMAGE: &str = "nflua4m4x4-default.hex";

pub fn default_program() -> Program {
    let mut program = Program::new();

    for addr in GridAddress::all() {
        program.push(Step::Reset { col: addr.col().into(), row: addr.row().into() });
    }

    // (0, 0): AND
    program
        .push(Step::GateType { col: 0, row: 0, gate: GateType::And })
        .push(io(0, 0, IoPort::A, Direction::Input))
        .push(io(0, 0, IoPort::B, Direction::Input))
        .push(io(0, 0, IoPort::D, Direction::Output))
        .push(Step::BusRoute { col: 0, row: 0, port: IoPort::A, bus: Bus::A })
        .push(Step::BusRoute { col: 0, row: 0, port: IoPort::B, bus: Bus::B })
        .push(io(0, 0, IoPort::C, Direction::Input));

    // (0, 1): A in -> C out
    program
        .push(Step::GateType { col: 0, row: 1, gate: GateType::PassThrough })
        .push(io(0, 1, IoPort::A, Direction::Input))
        .push(io(0, 1, IoPort::C, Direction::Output));

    program
}

fn io(col: i64, row: i64, port: IoPort, direction: Direction) -> Step {
    Step::IoConfig { col, row, port, direction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lua_core::{ImageDecoder, Intent, LuaConfig};

    #[test]
    fn default_program_layout() {
        let seq = default_program().assemble(&LuaConfig::strict()).expect("assemble failed");
        assert_eq!(seq.len(), 26);
        assert_eq!(seq.to_bytes().len(), 52);

        let words = ImageDecoder::decode(&seq.to_bytes()).expect("decode failed");
        assert!(words[..16].iter().all(|w| Intent::classify(w) == Intent::Reset));
        assert_eq!(Intent::classify(&words[16]), Intent::GateType(GateType::And));
        assert_eq!(
            Intent::classify(&words[19]),
            Intent::IoConfig { port: IoPort::D, is_input: false }
        );
        assert_eq!(
            Intent::classify(&words[21]),
            Intent::BusRoute { port: IoPort::B, to_bus_b: true }
        );
        assert_eq!(words[23].sel_row(), 1);
    }

    #[test]
    fn shipped_json_matches_default_program() {
        let text = include_str!("../../../demos/nflua4m4x4-default.json");
        let program = Program::from_json(text).expect("parse failed");
        assert_eq!(program, default_program());
    }
}
