//! Property-based tests for parent resolution.
