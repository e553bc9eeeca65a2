//! Core data types shared by the parsers and the accuracy engine.
//!
//! - [`AlignmentSegment`]: one aligned block of a query against a reference
//! - [`ReadAccuracy`]: reconciled identity and relative length for a read
//! - [`VariantColumn`]: one base-level reference/query column with context
//! - [`ErrorCategory`]: the closed error taxonomy
//!
//! ## Coordinates
//!
//! All offsets are 0-based and half-open, as in PAF.
//!
//! [`AlignmentSegment`]: types::AlignmentSegment
//! [`ReadAccuracy`]: types::ReadAccuracy
//! [`VariantColumn`]: types::VariantColumn
//! [`ErrorCategory`]: types::ErrorCategory

pub mod types;
