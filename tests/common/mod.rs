//! Common test utilities for relation engine integration tests
//!
//! Builds small graphs of labelled nodes and installs a tracing subscriber
//! so `RUST_LOG`-style output shows up under `cargo test -- --nocapture`.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{chain, labelled, names, Fixture};

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
