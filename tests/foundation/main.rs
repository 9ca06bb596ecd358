//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Type, EntityId, Timestamp, and Error.

mod timestamps;
mod values;
