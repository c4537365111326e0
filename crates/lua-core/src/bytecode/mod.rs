pub mod codes;
pub mod word;

pub use codes::{Bus, Direction, GateType, IoPort};
pub use word::InstructionWord;
