//! Test support for the scankit generators
//!
//! Shared helpers for the integration tests in `tests/`; nothing here ships.

pub mod layout;
