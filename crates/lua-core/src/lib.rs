//! Logic Unit Array - Core Library
//!
//! Public API surface for the LUA configuration word format: the packed
//! 16-bit word, the four instruction builders, and the caller-owned sequence
//! they are appended to.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod builder;
pub mod program;
pub mod loader;

// Re-export commonly used types
pub use error::{LuaError, LuaResult};
pub use config::{AddressMode, LuaConfig};
pub use bytecode::{Bus, Direction, GateType, InstructionWord, IoPort};
pub use builder::{build_bus_route, build_gate_type, build_io_config, build_reset, GridAddress};
pub use program::{InstructionSequence, Program, Step};
pub use loader::{ImageDecoder, Intent};
