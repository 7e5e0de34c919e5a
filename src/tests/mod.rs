//! Tests for the Incremental Merkle Sum Tree implementation
