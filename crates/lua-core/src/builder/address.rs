//! Grid addressing
//!
//! A logic unit is selected by a (column, row) pair. The hardware decoders
//! keep the low 2 bits of each; `checked` is the opt-in strict alternative.

use crate::bytecode::word::{GRID_COLUMNS, GRID_ROWS};
use crate::error::{LuaError, LuaResult};

const ADDRESS_MASK: u8 = 0x03;

/// Column/row of one logic unit, always within the 4x4 array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridAddress {
    col: u8,
    row: u8,
}

impl GridAddress {
    /// Truncate both coordinates to 2 bits
    pub const fn masked(col: u8, row: u8) -> Self {
        GridAddress {
            col: col & ADDRESS_MASK,
            row: row & ADDRESS_MASK,
        }
    }

    /// Keep the low 2 bits of arbitrary integers, negatives included
    pub const fn masked_wide(col: i64, row: i64) -> Self {
        GridAddress::masked((col & ADDRESS_MASK as i64) as u8, (row & ADDRESS_MASK as i64) as u8)
    }

    /// Reject coordinates outside the grid
    pub fn checked(col: i64, row: i64) -> LuaResult<Self> {
        if !(0..GRID_COLUMNS as i64).contains(&col) || !(0..GRID_ROWS as i64).contains(&row) {
            return Err(LuaError::AddressOutOfRange { col, row });
        }
        Ok(GridAddress::masked_wide(col, row))
    }

    /// True if masking would change either coordinate
    pub const fn truncates(col: i64, row: i64) -> bool {
        col & !(ADDRESS_MASK as i64) != 0 || row & !(ADDRESS_MASK as i64) != 0
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// Every unit in the array, column outer and row inner
    pub fn all() -> impl Iterator<Item = GridAddress> {
        (0..GRID_COLUMNS).flat_map(|col| (0..GRID_ROWS).map(move |row| GridAddress { col, row }))
    }
}
