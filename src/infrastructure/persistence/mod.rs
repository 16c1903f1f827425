//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - Process-local map, lost on restart

pub mod memory_link_store;

pub use memory_link_store::MemoryLinkStore;
