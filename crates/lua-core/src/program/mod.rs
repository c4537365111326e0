pub mod sequence;
pub mod step;

pub use sequence::InstructionSequence;
pub use step::{Program, Step};
