//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed feature schema (`FIELD_SCHEMA`, `FieldKind`, `NumericField`)
//! - raw form inputs (`RawInputs`)
//! - assembled column values (`FeatureValue`)

pub mod types;

pub use types::*;
