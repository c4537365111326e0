pub mod decoder;

pub use decoder::{ImageDecoder, Intent};
