//! Command-line interface for the Vesper binary.

pub mod args;
pub mod commands;
