//! Batch driver for the Sea-Thru underwater image corrector: scans a
//! directory for images, selects the first N in sorted order, and invokes an
//! external per-image processor for each one.

pub mod config;
pub mod engine;
