pub mod address;
pub mod builders;

pub use address::GridAddress;
pub use builders::{build_bus_route, build_gate_type, build_io_config, build_reset};
