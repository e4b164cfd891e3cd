//! Conversion Test Suite
//!
//! End-to-end tests of the encode and decode pipelines through the public
//! API.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test conversion
//!
//! # Property-based round trips only
//! cargo test --test conversion properties
//! ```

#[path = "../common/mod.rs"]
mod common;

mod atomicity;
mod config;
mod dynamic;
mod roundtrip;
mod shape_rejection;
mod update_map;
