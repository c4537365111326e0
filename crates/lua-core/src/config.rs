//! LUA Configuration
//!
//! Defines how program steps treat grid addresses.
//! Configuration specifies constraints only; the builders themselves always mask.

use crate::bytecode::word::{GRID_COLUMNS, GRID_ROWS};

/// How out-of-range column/row values are handled when assembling a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    /// Keep the low 2 bits, like the hardware address decoders
    #[default]
    Mask,

    /// Reject any column or row outside the grid
    Strict,
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct LuaConfig {
    /// Address handling for program steps
    pub address_mode: AddressMode,

    /// Number of grid columns addressed by `sel_col`
    pub grid_columns: u8,

    /// Number of grid rows addressed by `sel_row`
    pub grid_rows: u8,
}

impl Default for LuaConfig {
    fn default() -> Self {
        LuaConfig {
            address_mode: AddressMode::Mask,
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,
        }
    }
}

impl LuaConfig {
    /// Create a new configuration with masking address decoders
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that rejects out-of-range addresses
    pub fn strict() -> Self {
        LuaConfig {
            address_mode: AddressMode::Strict,
            ..Self::default()
        }
    }
}
