//! Property-based tests for range checking and comparison dispatch.
