//! Field Code Definitions
//!
//! Defines the 2-bit and 1-bit codes carried by instruction word fields.
//! Code values are part of the binary image contract.

use serde::{Deserialize, Serialize};

/// Boolean function computed by a logic unit (`sel_gate_type`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateType {
    PassThrough = 0,
    And = 1,
    Or = 2,
    Not = 3,
}

/// I/O port of a logic unit (`iosel`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoPort {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// Internal bus a port is routed onto (`abio`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bus {
    A = 0,
    B = 1,
}

/// Port direction (`min` / `mout`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
}

impl GateType {
    pub const ALL: [GateType; 4] =
        [GateType::PassThrough, GateType::And, GateType::Or, GateType::Not];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Gate type named by the low 2 bits of `bits`
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0b11 {
            0 => GateType::PassThrough,
            1 => GateType::And,
            2 => GateType::Or,
            _ => GateType::Not,
        }
    }
}

impl IoPort {
    pub const ALL: [IoPort; 4] = [IoPort::A, IoPort::B, IoPort::C, IoPort::D];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Port named by the low 2 bits of `bits`
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0b11 {
            0 => IoPort::A,
            1 => IoPort::B,
            2 => IoPort::C,
            _ => IoPort::D,
        }
    }
}

impl Bus {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_bus_b(to_bus_b: bool) -> Self {
        if to_bus_b {
            Bus::B
        } else {
            Bus::A
        }
    }
}

impl Direction {
    pub const fn from_is_input(is_input: bool) -> Self {
        if is_input {
            Direction::Input
        } else {
            Direction::Output
        }
    }

    pub const fn is_input(self) -> bool {
        matches!(self, Direction::Input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_field_values() {
        assert_eq!(GateType::PassThrough.code(), 0);
        assert_eq!(GateType::Not.code(), 3);
        assert_eq!(IoPort::D.code(), 3);
        assert_eq!(Bus::B.code(), 1);
    }

    #[test]
    fn field_codes_convert_back() {
        for g in GateType::ALL {
            assert_eq!(GateType::from_field(g.code()), g);
        }
        for p in IoPort::ALL {
            assert_eq!(IoPort::from_field(p.code()), p);
        }
        assert_eq!(GateType::from_field(5), GateType::And);
        assert_eq!(IoPort::from_field(0xFE), IoPort::C);
    }

    #[test]
    fn names_in_json() {
        let g: GateType = serde_json::from_str("\"pass_through\"").unwrap();
        assert_eq!(g, GateType::PassThrough);
        let d: Direction = serde_json::from_str("\"output\"").unwrap();
        assert!(!d.is_input());
    }
}
