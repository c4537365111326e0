//! Image Decoder
//!
//! Reads a binary image back into words and names the intent of each.
//! The configuration format itself is write-only; this path exists for tests
//! and for inspecting generated images.

use crate::bytecode::codes::{GateType, IoPort};
use crate::bytecode::word::{InstructionWord, WORD_SIZE};
use crate::error::{LuaError, LuaResult};

/// What a decoded word asks the hardware to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Nop,
    Reset,
    GateType(GateType),
    IoConfig { port: IoPort, is_input: bool },
    BusRoute { port: IoPort, to_bus_b: bool },
    Unknown,
}

impl Intent {
    /// Classify a word by which fields are populated
    pub fn classify(word: &InstructionWord) -> Intent {
        let port = IoPort::from_field(word.iosel());
        let intent_bits = (word.rst(), word.set_gate_type(), word.perf(), word.min(), word.mout());

        match intent_bits {
            (0, 0, 0, 0, 0) if word.raw() & !0x000F == 0 => Intent::Nop,
            (1, 0, 0, 0, 0) if Self::only_address(word) => Intent::Reset,
            (0, 1, 0, 0, 0) if word.abio() == 0 && word.iosel() == 0 => {
                Intent::GateType(GateType::from_field(word.sel_gate_type()))
            }
            (0, 0, 1, min, mout)
                if min ^ mout == 1 && word.abio() == 0 && word.sel_gate_type() == 0 =>
            {
                Intent::IoConfig { port, is_input: min == 1 }
            }
            (0, 0, 1, 0, 0) if word.sel_gate_type() == 0 => {
                Intent::BusRoute { port, to_bus_b: word.abio() == 1 }
            }
            _ => Intent::Unknown,
        }
    }

    fn only_address(word: &InstructionWord) -> bool {
        word.with_sel_col(0).with_sel_row(0).with_rst(0) == InstructionWord::zero()
    }
}

/// Image decoder
pub struct ImageDecoder;

impl ImageDecoder {
    /// Split an image into words, rejecting odd lengths and reserved bits
    pub fn decode(bytes: &[u8]) -> LuaResult<Vec<InstructionWord>> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(LuaError::OddImageLength(bytes.len()));
        }

        let mut words = Vec::with_capacity(bytes.len() / WORD_SIZE);
        let mut cursor = 0;
        while cursor < bytes.len() {
            let word = Self::read_word(bytes, &mut cursor)?;
            if word.has_reserved_bits() {
                return Err(LuaError::ReservedBitsSet {
                    index: words.len(),
                    raw: word.raw(),
                });
            }
            words.push(word);
        }
        Ok(words)
    }

    fn read_word(bytes: &[u8], cursor: &mut usize) -> LuaResult<InstructionWord> {
        if *cursor + WORD_SIZE > bytes.len() {
            return Err(LuaError::OddImageLength(bytes.len()));
        }
        let word = InstructionWord::from_le_bytes([bytes[*cursor], bytes[*cursor + 1]]);
        *cursor += WORD_SIZE;
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_bus_route, build_gate_type, build_io_config, build_reset};

    #[test]
    fn classifies_builder_output() {
        assert_eq!(Intent::classify(&build_reset(2, 3)), Intent::Reset);
        assert_eq!(
            Intent::classify(&build_gate_type(0, 0, GateType::Not)),
            Intent::GateType(GateType::Not)
        );
        assert_eq!(
            Intent::classify(&build_io_config(1, 1, IoPort::C, false)),
            Intent::IoConfig { port: IoPort::C, is_input: false }
        );
        assert_eq!(
            Intent::classify(&build_bus_route(1, 1, IoPort::A, false)),
            Intent::BusRoute { port: IoPort::A, to_bus_b: false }
        );
        assert_eq!(Intent::classify(&InstructionWord::zero()), Intent::Nop);
    }

    #[test]
    fn every_gate_and_port_code_classifies() {
        for gate in GateType::ALL {
            assert_eq!(Intent::classify(&build_gate_type(3, 0, gate)), Intent::GateType(gate));
        }
        for port in IoPort::ALL {
            assert_eq!(
                Intent::classify(&build_bus_route(0, 3, port, true)),
                Intent::BusRoute { port, to_bus_b: true }
            );
            assert_eq!(
                Intent::classify(&build_io_config(0, 3, port, true)),
                Intent::IoConfig { port, is_input: true }
            );
        }
    }

    #[test]
    fn mixed_fields_are_unknown() {
        let both = build_io_config(0, 0, IoPort::A, true).with_mout(1);
        assert_eq!(Intent::classify(&both), Intent::Unknown);
        let reset_and_gate = build_reset(0, 0).with_set_gate_type(1);
        assert_eq!(Intent::classify(&reset_and_gate), Intent::Unknown);
    }

    #[test]
    fn decode_rejects_bad_images() {
        assert!(matches!(ImageDecoder::decode(&[0x10]), Err(LuaError::OddImageLength(1))));
        assert!(matches!(
            ImageDecoder::decode(&[0x10, 0x00, 0x00, 0x40]),
            Err(LuaError::ReservedBitsSet { index: 1, raw: 0x4000 })
        ));
    }

    #[test]
    fn decode_empty_image() {
        assert!(ImageDecoder::decode(&[]).unwrap().is_empty());
    }
}
