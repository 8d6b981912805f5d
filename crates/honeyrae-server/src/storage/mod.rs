//! Storage layer
//!
//! Three DashMap tables held in process memory; nothing is persisted.

pub mod memory;
pub mod seed;

pub use memory::{MemoryStore, StoreCounts};
