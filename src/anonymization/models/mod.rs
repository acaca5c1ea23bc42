//! Detection and masking data models

pub mod detection;

pub use detection::{Detection, DetectionSource, FlaggedField, MaskingCategory, RedactionOutcome};
