//! Common utilities for the RSCSS linter.
//!
//! This crate provides shared infrastructure used by the parser and the rules:
//! - **Warning System** - deduplicated notices routed through `tracing`

pub mod warning;
