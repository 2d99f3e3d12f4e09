//! Input helpers.
//!
//! - raw-input JSON parsing + range validation (`input`)

pub mod input;

pub use input::*;
