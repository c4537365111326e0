//! Program steps
//!
//! A program is data: an ordered list of builder calls with their arguments.
//! Assembling it runs each call in order and collects the words.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::builder::{build_bus_route, build_gate_type, build_io_config, build_reset, GridAddress};
use crate::bytecode::codes::{Bus, Direction, GateType, IoPort};
use crate::bytecode::word::InstructionWord;
use crate::config::{AddressMode, LuaConfig};
use crate::error::LuaResult;

use super::sequence::InstructionSequence;

/// One builder call
///
/// Coordinates are arbitrary integers; the address mode decides whether
/// values outside the grid are truncated or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Reset { col: i64, row: i64 },
    GateType { col: i64, row: i64, gate: GateType },
    IoConfig { col: i64, row: i64, port: IoPort, direction: Direction },
    BusRoute { col: i64, row: i64, port: IoPort, bus: Bus },
}

impl Step {
    pub fn address(&self) -> (i64, i64) {
        match *self {
            Step::Reset { col, row }
            | Step::GateType { col, row, .. }
            | Step::IoConfig { col, row, .. }
            | Step::BusRoute { col, row, .. } => (col, row),
        }
    }

    /// Run the builder for this step under the configured address mode
    pub fn build(&self, config: &LuaConfig) -> LuaResult<InstructionWord> {
        let (col, row) = self.address();
        let addr = match config.address_mode {
            AddressMode::Strict => GridAddress::checked(col, row)?,
            AddressMode::Mask => {
                if GridAddress::truncates(col, row) {
                    warn!("address ({}, {}) truncated to 2 bits", col, row);
                }
                GridAddress::masked_wide(col, row)
            }
        };
        let (col, row) = (addr.col(), addr.row());

        let word = match *self {
            Step::Reset { .. } => build_reset(col, row),
            Step::GateType { gate, .. } => build_gate_type(col, row, gate),
            Step::IoConfig { port, direction, .. } => {
                build_io_config(col, row, port, direction.is_input())
            }
            Step::BusRoute { port, bus, .. } => build_bus_route(col, row, port, bus == Bus::B),
        };
        debug!("{:?} -> 0x{:04X}", self, word.raw());
        Ok(word)
    }
}

/// Ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    steps: Vec<Step>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of steps
    pub fn from_json(text: &str) -> LuaResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> LuaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Build every step in order; the first rejected step aborts assembly
    pub fn assemble(&self, config: &LuaConfig) -> LuaResult<InstructionSequence> {
        let mut seq = InstructionSequence::with_capacity(self.steps.len());
        for step in &self.steps {
            seq.push(step.build(config)?);
        }
        Ok(seq)
    }
}

impl From<Vec<Step>> for Program {
    fn from(steps: Vec<Step>) -> Self {
        Program { steps }
    }
}
