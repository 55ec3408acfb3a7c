//! Property-based tests for the exact arithmetic backends.
