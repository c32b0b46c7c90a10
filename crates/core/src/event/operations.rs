use crate::storage::{ParticipantPolicy, RepositoryError, Result};

use super::types::{Event, Participant};

/// Appends a participant to an event, honouring the duplicate policy.
pub fn register_participant(
    event: &mut Event,
    participant: Participant,
    policy: ParticipantPolicy,
) -> Result<()> {
    if policy.rejects_duplicates() && event.has_participant(&participant.email) {
        return Err(RepositoryError::participant_already_exists(
            &event.event_id,
            participant.email,
        ));
    }
    event.participants.push(participant);
    Ok(())
}

/// Removes the first participant matching `email` and returns it.
pub fn unregister_participant(event: &mut Event, email: &str) -> Result<Participant> {
    match event.participant_position(email) {
        Some(index) => Ok(event.participants.remove(index)),
        None => Err(RepositoryError::participant_not_found(
            &event.event_id,
            email,
        )),
    }
}
