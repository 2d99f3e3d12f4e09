//! Feature record assembly.

pub mod assemble;
pub mod record;

pub use assemble::assemble;
pub use record::{FeatureRecord, FeatureSlot};
