pub mod slot;
pub mod timestamp;
