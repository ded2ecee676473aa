//! Output implementations

pub mod buffer;
pub mod stdout;

pub use buffer::BufferOutput;
pub use stdout::StdoutOutput;

pub use crate::core::Output;
