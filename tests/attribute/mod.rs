//! Integration tests for attribute trees.

pub mod complex_attributes;
pub mod deep_copy;
