/// Slot listing, availability, creation, booking and deletion
pub mod slots;
