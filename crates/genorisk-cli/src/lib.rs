//! genorisk-cli
//!
//! Command-line host for the scoring engine. Reads JSON inputs from disk,
//! runs one engine operation and prints the result as JSON on stdout.

pub mod commands;
pub mod input;
