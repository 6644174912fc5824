//! # scankit-cli
//!
//! Library layer behind the `gen-profile` and `gen-icon` binaries: the
//! generation entry points and the atomic output writer. Both binaries take
//! no arguments and write fixed filenames into the current directory.

pub mod generate;
pub mod output;
