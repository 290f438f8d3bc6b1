//! Cross-crate integration tests for Credentia. No library code; see the
//! `tests/` directory.
