//! Shared types for Hanzi decomposition and dictionary lookup.
//!
//! # Architecture
//!
//! - [`character`] -- CJK classification and input normalization
//! - [`decomposition`] -- Decomposition result types and the missing-glyph sentinel
//! - [`entry`] -- Dictionary and frequency records
//! - [`enums`] -- Decomposition modes, scripts, lookup sources, search modes
//! - [`error`] -- The crate-wide error type

pub mod character;
pub mod decomposition;
pub mod entry;
pub mod enums;
pub mod error;

pub use error::{HanziError, Result};
