#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the rationl crates.
//!
//! Patterns are written over Unicode scalars, but every automaton in the
//! workspace transitions on bytes. This crate holds the byte-level alphabet:
//! - **Ranges and sets**: `ByteRange`, `ByteSet`
//! - **Alphabet compression**: `ByteClassSet` collects range boundaries,
//!   `ByteClasses` maps each byte to its equivalence class
//! - **Values**: `Span` for match positions, `Colors` for terminal output

pub mod alphabet;
pub mod byte_classes;
pub mod colors;
mod span;

pub use alphabet::{ByteRange, ByteSet, escape_byte};
pub use byte_classes::{ByteClassSet, ByteClasses};
pub use colors::Colors;
pub use span::Span;

#[cfg(test)]
mod span_tests;
