//! genorisk-core
//!
//! Pure domain types for genetic risk scoring. No scoring logic lives here;
//! this is the shared vocabulary between the engine and its hosts.

pub mod error;
pub mod models;
