//! genorisk-engine
//!
//! Polygenic risk scoring over a validated variant catalog. Every scoring
//! function here is synchronous and side-effect free; the only shared state
//! is the read-only catalog owned by a [`engine::RiskEngine`].

pub mod aggregate;
pub mod catalog;
pub mod categorize;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod prs;
pub mod recommend;
pub mod weighting;
