use thiserror::Error;

use crate::StoreError;

pub type Result<T> = std::result::Result<T, ReservationError>;

/// Everything that can go wrong inside the reservation engine.
///
/// All variants are recoverable at the call site; the engine never
/// terminates the process on its own.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// An unknown username or room type was referenced
    #[error("{resource} {identifier:?} doesn't exist")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },
    /// A resource with the same key already exists
    #[error("{resource} with {field} of value {value:?} already exists")]
    AlreadyExists {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// A numeric or textual field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// The room type exists but has no units left
    #[error("No {room_type} rooms are available")]
    Unavailable { room_type: String },
    /// A booking index does not reference an existing booking
    #[error("Booking selection {index} is out of range")]
    InvalidSelection { index: usize },
    /// Something went wrong reading or writing a store file
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReservationError {
    pub fn not_found(resource: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            identifier: identifier.into(),
        }
    }
}
