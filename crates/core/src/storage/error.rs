use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },
    #[error("Event already exists: {event_id}")]
    EventAlreadyExists { event_id: String },
    #[error("Participant {email} not found in event {event_id}")]
    ParticipantNotFound { event_id: String, email: String },
    #[error("Participant {email} already registered for event {event_id}")]
    ParticipantAlreadyExists { event_id: String, email: String },
}

impl RepositoryError {
    pub fn event_not_found(event_id: impl Into<String>) -> Self {
        Self::EventNotFound {
            event_id: event_id.into(),
        }
    }

    pub fn event_already_exists(event_id: impl Into<String>) -> Self {
        Self::EventAlreadyExists {
            event_id: event_id.into(),
        }
    }

    pub fn participant_not_found(event_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self::ParticipantNotFound {
            event_id: event_id.into(),
            email: email.into(),
        }
    }

    pub fn participant_already_exists(
        event_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::ParticipantAlreadyExists {
            event_id: event_id.into(),
            email: email.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_not_found_display() {
        let error = RepositoryError::event_not_found("abc-123");
        assert_eq!(error.to_string(), "Event not found: abc-123");
    }

    #[test]
    fn test_event_already_exists_display() {
        let error = RepositoryError::event_already_exists("standup");
        assert_eq!(error.to_string(), "Event already exists: standup");
    }

    #[test]
    fn test_participant_not_found_display() {
        let error = RepositoryError::participant_not_found("1", "a@x.com");
        assert_eq!(error.to_string(), "Participant a@x.com not found in event 1");
    }

    #[test]
    fn test_participant_already_exists_display() {
        let error = RepositoryError::participant_already_exists("1", "a@x.com");
        assert_eq!(
            error.to_string(),
            "Participant a@x.com already registered for event 1"
        );
    }
}
