//! Pure functions for mapping repository outcomes to store status codes.

use crate::event::StatusCode;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to a [`StatusCode`].
///
/// - `EventNotFound` -> `NotFound`
/// - `ParticipantNotFound` -> `NotFound`
/// - `EventAlreadyExists` -> `Fail`
/// - `ParticipantAlreadyExists` -> `Fail`
///
/// # Examples
///
/// ```
/// use eventdesk_core::event::StatusCode;
/// use eventdesk_core::storage::{repository_error_to_status, RepositoryError};
///
/// let error = RepositoryError::event_not_found("abc-123");
/// assert_eq!(repository_error_to_status(&error), StatusCode::NotFound);
/// ```
pub fn repository_error_to_status(error: &RepositoryError) -> StatusCode {
    match error {
        RepositoryError::EventNotFound { .. } => StatusCode::NotFound,
        RepositoryError::ParticipantNotFound { .. } => StatusCode::NotFound,
        RepositoryError::EventAlreadyExists { .. } => StatusCode::Fail,
        RepositoryError::ParticipantAlreadyExists { .. } => StatusCode::Fail,
    }
}

/// Collapses a repository result into a [`StatusCode`], dropping any payload.
pub fn result_to_status<T>(result: &super::Result<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::Ok,
        Err(error) => repository_error_to_status(error),
    }
}
