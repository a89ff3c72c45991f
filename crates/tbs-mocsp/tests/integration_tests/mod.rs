//! Modular integration tests for the ripple-spreading search.

pub mod error_tests;
