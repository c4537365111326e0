//! Instruction Word Representation
//!
//! Defines the packed 16-bit configuration word.
//! This layer contains no intent semantics; the builders decide which
//! combination of fields makes a reset, a gate-type set, an I/O direction
//! set or a bus route.

use std::fmt;

/// Columns in the logic unit array
pub const GRID_COLUMNS: u8 = 4;

/// Rows in the logic unit array
pub const GRID_ROWS: u8 = 4;

/// Serialized size of every instruction word
pub const WORD_SIZE: usize = 2;

//
// WORD LAYOUT (little-endian u16)
//
//   f e   d c   b     a     9     8     7 6   5     4     3 2   1 0
//   [ - ] [ io] [min] [mout][perf][abio][gt ] [sgt] [rst] [row] [col]
//
//   col   sel_col        target column
//   row   sel_row        target row
//   rst   rst            reset the addressed unit
//   sgt   set_gate_type  apply the gate-type field
//   gt    sel_gate_type  gate variant code
//   abio  abio           route port to bus A (0) or B (1)
//   perf  perf           commit an I/O or routing change
//   mout  mout           port is an output
//   min   min            port is an input
//   io    iosel          selected port
//   -     unused         reserved, always zero
//
const SEL_COL_SHIFT: u32 = 0;
const SEL_ROW_SHIFT: u32 = 2;
const RST_SHIFT: u32 = 4;
const SET_GATE_TYPE_SHIFT: u32 = 5;
const SEL_GATE_TYPE_SHIFT: u32 = 6;
const ABIO_SHIFT: u32 = 8;
const PERF_SHIFT: u32 = 9;
const MOUT_SHIFT: u32 = 10;
const MIN_SHIFT: u32 = 11;
const IOSEL_SHIFT: u32 = 12;
const UNUSED_SHIFT: u32 = 14;

/// Bits that no instruction may set
pub const RESERVED_MASK: u16 = FIELD2 << UNUSED_SHIFT;

const FIELD2: u16 = 0b11;
const FIELD1: u16 = 0b1;

/// One packed configuration instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InstructionWord(u16);

impl InstructionWord {
    /// The all-zero word
    pub const fn zero() -> Self {
        InstructionWord(0)
    }

    /// Wrap raw bits as read back from an image
    pub const fn from_raw(raw: u16) -> Self {
        InstructionWord(raw)
    }

    pub const fn from_le_bytes(bytes: [u8; WORD_SIZE]) -> Self {
        InstructionWord(u16::from_le_bytes(bytes))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn to_le_bytes(self) -> [u8; WORD_SIZE] {
        self.0.to_le_bytes()
    }

    const fn field(self, shift: u32, mask: u16) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    /// Store `value` into a field, keeping only its low bits
    const fn with_field(self, shift: u32, mask: u16, value: u8) -> Self {
        let cleared = self.0 & !(mask << shift);
        InstructionWord(cleared | ((value as u16 & mask) << shift))
    }

    pub const fn sel_col(self) -> u8 {
        self.field(SEL_COL_SHIFT, FIELD2)
    }

    pub const fn sel_row(self) -> u8 {
        self.field(SEL_ROW_SHIFT, FIELD2)
    }

    pub const fn rst(self) -> u8 {
        self.field(RST_SHIFT, FIELD1)
    }

    pub const fn set_gate_type(self) -> u8 {
        self.field(SET_GATE_TYPE_SHIFT, FIELD1)
    }

    pub const fn sel_gate_type(self) -> u8 {
        self.field(SEL_GATE_TYPE_SHIFT, FIELD2)
    }

    pub const fn abio(self) -> u8 {
        self.field(ABIO_SHIFT, FIELD1)
    }

    pub const fn perf(self) -> u8 {
        self.field(PERF_SHIFT, FIELD1)
    }

    pub const fn mout(self) -> u8 {
        self.field(MOUT_SHIFT, FIELD1)
    }

    pub const fn min(self) -> u8 {
        self.field(MIN_SHIFT, FIELD1)
    }

    pub const fn iosel(self) -> u8 {
        self.field(IOSEL_SHIFT, FIELD2)
    }

    pub const fn unused(self) -> u8 {
        self.field(UNUSED_SHIFT, FIELD2)
    }

    pub const fn with_sel_col(self, value: u8) -> Self {
        self.with_field(SEL_COL_SHIFT, FIELD2, value)
    }

    pub const fn with_sel_row(self, value: u8) -> Self {
        self.with_field(SEL_ROW_SHIFT, FIELD2, value)
    }

    pub const fn with_rst(self, value: u8) -> Self {
        self.with_field(RST_SHIFT, FIELD1, value)
    }

    pub const fn with_set_gate_type(self, value: u8) -> Self {
        self.with_field(SET_GATE_TYPE_SHIFT, FIELD1, value)
    }

    pub const fn with_sel_gate_type(self, value: u8) -> Self {
        self.with_field(SEL_GATE_TYPE_SHIFT, FIELD2, value)
    }

    pub const fn with_abio(self, value: u8) -> Self {
        self.with_field(ABIO_SHIFT, FIELD1, value)
    }

    pub const fn with_perf(self, value: u8) -> Self {
        self.with_field(PERF_SHIFT, FIELD1, value)
    }

    pub const fn with_mout(self, value: u8) -> Self {
        self.with_field(MOUT_SHIFT, FIELD1, value)
    }

    pub const fn with_min(self, value: u8) -> Self {
        self.with_field(MIN_SHIFT, FIELD1, value)
    }

    pub const fn with_iosel(self, value: u8) -> Self {
        self.with_field(IOSEL_SHIFT, FIELD2, value)
    }

    /// True when any reserved bit is set
    pub const fn has_reserved_bits(self) -> bool {
        self.0 & RESERVED_MASK != 0
    }
}

impl From<InstructionWord> for u16 {
    fn from(word: InstructionWord) -> Self {
        word.0
    }
}

impl fmt::Display for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "col={} row={} rst={} sgt={} gt={} abio={} perf={} mout={} min={} io={}",
            self.sel_col(),
            self.sel_row(),
            self.rst(),
            self.set_gate_type(),
            self.sel_gate_type(),
            self.abio(),
            self.perf(),
            self.mout(),
            self.min(),
            self.iosel(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_word_has_no_fields() {
        let w = InstructionWord::zero();
        assert_eq!(w.raw(), 0);
        assert_eq!(w, InstructionWord::default());
    }

    #[test]
    fn fields_land_on_their_bit_positions() {
        assert_eq!(InstructionWord::zero().with_sel_col(3).raw(), 0x0003);
        assert_eq!(InstructionWord::zero().with_sel_row(3).raw(), 0x000C);
        assert_eq!(InstructionWord::zero().with_rst(1).raw(), 0x0010);
        assert_eq!(InstructionWord::zero().with_set_gate_type(1).raw(), 0x0020);
        assert_eq!(InstructionWord::zero().with_sel_gate_type(3).raw(), 0x00C0);
        assert_eq!(InstructionWord::zero().with_abio(1).raw(), 0x0100);
        assert_eq!(InstructionWord::zero().with_perf(1).raw(), 0x0200);
        assert_eq!(InstructionWord::zero().with_mout(1).raw(), 0x0400);
        assert_eq!(InstructionWord::zero().with_min(1).raw(), 0x0800);
        assert_eq!(InstructionWord::zero().with_iosel(3).raw(), 0x3000);
    }

    #[test]
    fn wide_values_keep_low_bits() {
        let w = InstructionWord::zero().with_sel_col(7).with_sel_row(0xFE).with_rst(3);
        assert_eq!(w.sel_col(), 3);
        assert_eq!(w.sel_row(), 2);
        assert_eq!(w.rst(), 1);
        assert!(!w.has_reserved_bits());
    }

    #[test]
    fn overwriting_a_field_clears_old_bits() {
        let w = InstructionWord::zero().with_iosel(3).with_iosel(1);
        assert_eq!(w.iosel(), 1);
        assert_eq!(w.raw(), 0x1000);
    }

    #[test]
    fn little_endian_bytes() {
        let w = InstructionWord::zero().with_rst(1).with_sel_row(1).with_min(1);
        assert_eq!(w.to_le_bytes(), [0x14, 0x08]);
        assert_eq!(InstructionWord::from_le_bytes([0x14, 0x08]), w);
    }

    #[test]
    fn reserved_bits_detected() {
        assert!(InstructionWord::from_raw(0x4000).has_reserved_bits());
        assert_eq!(InstructionWord::from_raw(0xC000).unused(), 3);
    }
}
