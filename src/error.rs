use thiserror::Error;

/// Returned when the members of an empty set are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error: Cannot retrieve members from an empty set.")]
pub struct EmptySetError;
