//! Integration tests for pocketbase-bootstrap.
//!
//! Each test stands up a wiremock server playing the PocketBase admin API
//! under `/api/*` and drives the real REST transport against it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # A single test, with output
//! cargo test --test integration test_second_run_is_a_no_op -- --nocapture
//! ```

mod common;
mod provisioning_tests;
mod transport_tests;
