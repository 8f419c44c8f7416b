//! # Slotbook Core
//!
//! Shared vocabulary for the slot booking service: the slot data model,
//! the request and response shapes exchanged with clients, the error
//! taxonomy, and the interval arithmetic the store validates against.

pub mod errors;
pub mod models;
pub mod rules;
