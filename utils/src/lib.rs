//! Shared infrastructure utilities for Reckon.
//!
//! Cross-cutting helpers that don't belong in the domain-pure `reckon-types`
//! crate. Currently just crash-safe file persistence (temp + rename), used to
//! save preferences without ever leaving a truncated config file behind.

pub mod atomic_write;

pub use atomic_write::{AtomicWriteOptions, atomic_write_with_options};
