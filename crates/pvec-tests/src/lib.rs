//! Integration tests for pvec crates.
//!
//! This crate contains property and scenario tests that exercise
//! `pvec-math` and `pvec-io` together.
