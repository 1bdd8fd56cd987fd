//! Request middleware.
//!
//! Purpose: define middleware for request lifecycle concerns. Currently only
//! per-request trace identifiers.

pub mod trace;

pub use trace::Trace;
