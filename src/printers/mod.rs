//! Printer implementations

pub mod json;
pub mod memory;
pub mod text;

pub use json::JsonPrinter;
pub use memory::{MemoryPrinter, PrintedRecord};
pub use text::StdPrinter;

pub use crate::core::Printer;
