//! Property-based tests for pure domain logic

mod slug_proptest;
