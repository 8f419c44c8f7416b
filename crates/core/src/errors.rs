use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Missing from or to")]
    MissingRange,

    #[error("Start time must be before end time")]
    InvalidRange,

    #[error("Slot must be 15, 30, or 60 minutes")]
    InvalidDuration,

    #[error("Slot cannot overlap an existing slot")]
    Overlap,

    #[error("Slot not found: {0}")]
    NotFound(Uuid),

    #[error("Slot is already booked: {0}")]
    AlreadyBooked(Uuid),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

impl SlotError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SlotError::MissingRange => "missing_range",
            SlotError::InvalidRange => "invalid_range",
            SlotError::InvalidDuration => "invalid_duration",
            SlotError::Overlap => "overlap",
            SlotError::NotFound(_) => "not_found",
            SlotError::AlreadyBooked(_) => "already_booked",
            SlotError::InvalidEmail(_) => "invalid_email",
        }
    }
}

pub type SlotResult<T> = Result<T, SlotError>;
