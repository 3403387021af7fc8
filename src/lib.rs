//! Workspace-level integration tests for zeckendorf-rs.
//!
//! The test suites live in `tests/`; golden values are in `tests/testdata/`.
