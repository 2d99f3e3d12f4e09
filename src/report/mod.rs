//! Reporting utilities: prediction messages, record and schema listings.

pub mod format;

pub use format::*;
