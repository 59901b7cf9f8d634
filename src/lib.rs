//! Plaintable - fixed-width text tables for console and log output
//!
//! This crate accumulates a header and rows of arbitrary values and renders
//! them as a right-aligned, space-padded text block. It is a display helper,
//! not a data-processing engine: every row is held in memory and the whole
//! block is produced in one call.

// Core modules
pub mod cell;
pub mod error;
pub mod table;

// Re-export main types for convenience
pub use cell::Cell;
pub use error::{Result, TableError};
pub use table::TableBuilder;
