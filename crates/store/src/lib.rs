//! # Slotbook Store
//!
//! The authoritative in-memory slot collection. [`SlotStore`] owns the slots
//! and enforces every business rule before it mutates them; callers that
//! share a store across tasks wrap it in a single lock.

pub mod seed;
pub mod store;

pub use store::SlotStore;
