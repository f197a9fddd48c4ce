//! Foundational low-level utilities shared across holiday crates.
//!
//! Provides the atomic file helpers used by file-backed selection storage.

pub mod atomic_io;

pub use atomic_io::{read_text_if_exists, write_text_atomic};
