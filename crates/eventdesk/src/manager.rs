//! Status-code facade over an event repository.
//!
//! Every operation completes with a [`StatusCode`] instead of an error, so
//! embedding code can branch on `Ok`, `NotFound` or `Fail` directly.

use std::sync::Arc;

use eventdesk_core::event::{Event, Participant, StatusCode};
use eventdesk_core::storage::{
    repository_error_to_status, result_to_status, EventRepository, RepositoryError,
};

/// Manages events and their participants.
///
/// Construct one per store and pass it where needed; clones share the same
/// underlying repository.
#[derive(Clone)]
pub struct EventManager {
    repository: Arc<dyn EventRepository>,
}

impl EventManager {
    /// Creates a manager over the given repository.
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &Arc<dyn EventRepository> {
        &self.repository
    }

    /// Adds a new event. `Fail` if an event with the same ID exists.
    pub async fn add_event(&self, event: Event) -> StatusCode {
        let result = self.repository.create_event(event).await;
        log_rejection("add_event", &result);
        result_to_status(&result)
    }

    /// Replaces an existing event. `NotFound` if there is no event with its ID.
    pub async fn update_event(&self, event: Event) -> StatusCode {
        let result = self.repository.update_event(event).await;
        log_rejection("update_event", &result);
        result_to_status(&result)
    }

    /// Deletes an event. `NotFound` if it does not exist.
    pub async fn delete_event(&self, event_id: &str) -> StatusCode {
        let result = self.repository.delete_event(event_id).await;
        log_rejection("delete_event", &result);
        result_to_status(&result)
    }

    /// Retrieves an event by ID.
    ///
    /// The event is present only when the status is `Ok`.
    pub async fn get_event(&self, event_id: &str) -> (StatusCode, Option<Event>) {
        match self.repository.get_event(event_id).await {
            Ok(Some(event)) => (StatusCode::Ok, Some(event)),
            Ok(None) => (StatusCode::NotFound, None),
            Err(err) => (repository_error_to_status(&err), None),
        }
    }

    /// Retrieves all events.
    pub async fn list_events(&self) -> Vec<Event> {
        match self.repository.list_events().await {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list events");
                Vec::new()
            }
        }
    }

    /// Adds a participant to an event.
    ///
    /// `NotFound` if the event does not exist, `Fail` if the email is already
    /// registered and the repository rejects duplicates.
    pub async fn add_participant(&self, participant: Participant, event_id: &str) -> StatusCode {
        let result = self.repository.add_participant(event_id, participant).await;
        log_rejection("add_participant", &result);
        result_to_status(&result)
    }

    /// Removes a participant from an event, matching by email.
    ///
    /// `NotFound` if either the event or the participant does not exist.
    pub async fn remove_participant(&self, participant: &Participant, event_id: &str) -> StatusCode {
        let result = self
            .repository
            .remove_participant(event_id, &participant.email)
            .await;
        log_rejection("remove_participant", &result);
        result_to_status(&result)
    }
}

fn log_rejection(operation: &'static str, result: &Result<(), RepositoryError>) {
    if let Err(err) = result {
        tracing::debug!(operation, error = %err, "Event store operation rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::storage::{InMemoryRepository, ListRepository};

    fn standup() -> Event {
        Event::new(
            "1",
            "Standup",
            Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 3, 9, 15, 0).unwrap(),
        )
        .with_description("Daily sync")
        .with_location("Room 4")
    }

    fn managers() -> Vec<EventManager> {
        vec![
            EventManager::new(Arc::new(InMemoryRepository::new())),
            EventManager::new(Arc::new(ListRepository::new())),
        ]
    }

    async fn participant_count(manager: &EventManager, event_id: &str) -> usize {
        let (_, event) = manager.get_event(event_id).await;
        event.map(|e| e.participant_count()).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_add_event_twice_keeps_first() {
        for manager in managers() {
            assert_eq!(manager.add_event(standup()).await, StatusCode::Ok);
            assert_eq!(
                manager
                    .add_event(standup().with_location("Somewhere else"))
                    .await,
                StatusCode::Fail
            );

            let (status, event) = manager.get_event("1").await;
            assert_eq!(status, StatusCode::Ok);
            assert_eq!(event, Some(standup()));
        }
    }

    #[tokio::test]
    async fn test_get_after_delete_is_not_found() {
        for manager in managers() {
            manager.add_event(standup()).await;

            assert_eq!(manager.delete_event("1").await, StatusCode::Ok);
            assert_eq!(manager.get_event("1").await, (StatusCode::NotFound, None));
            assert_eq!(manager.delete_event("1").await, StatusCode::NotFound);
        }
    }

    #[tokio::test]
    async fn test_update_unknown_event_does_not_insert() {
        for manager in managers() {
            assert_eq!(manager.update_event(standup()).await, StatusCode::NotFound);
            assert!(manager.list_events().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        for manager in managers() {
            manager.add_event(standup()).await;
            let mut moved = standup();
            moved.name = "Standup (late)".to_string();
            moved.start_time = Utc.with_ymd_and_hms(2024, 6, 3, 11, 0, 0).unwrap();

            assert_eq!(manager.update_event(moved.clone()).await, StatusCode::Ok);

            let (_, event) = manager.get_event("1").await;
            assert_eq!(event, Some(moved));
        }
    }

    #[tokio::test]
    async fn test_list_events_returns_all() {
        for manager in managers() {
            manager.add_event(standup()).await;
            let mut retro = standup();
            retro.event_id = "2".to_string();
            manager.add_event(retro).await;

            let ids: Vec<String> = manager
                .list_events()
                .await
                .into_iter()
                .map(|e| e.event_id)
                .collect();
            assert_eq!(ids, vec!["1", "2"]);
        }
    }

    #[tokio::test]
    async fn test_participant_status_codes() {
        for manager in managers() {
            let ada = Participant::new("a@x.com").with_name("Ada");

            assert_eq!(
                manager.add_participant(ada.clone(), "1").await,
                StatusCode::NotFound
            );
            assert_eq!(
                manager.remove_participant(&ada, "1").await,
                StatusCode::NotFound
            );

            manager.add_event(standup()).await;
            assert_eq!(
                manager.remove_participant(&ada, "1").await,
                StatusCode::NotFound
            );
            assert_eq!(manager.add_participant(ada.clone(), "1").await, StatusCode::Ok);
            assert_eq!(participant_count(&manager, "1").await, 1);
        }
    }

    #[tokio::test]
    async fn test_standup_scenario() {
        for manager in managers() {
            let participant = Participant::new("a@x.com");

            assert_eq!(manager.add_event(standup()).await, StatusCode::Ok);

            assert_eq!(
                manager.add_participant(participant.clone(), "1").await,
                StatusCode::Ok
            );
            assert_eq!(participant_count(&manager, "1").await, 1);

            assert_eq!(
                manager.add_participant(participant.clone(), "1").await,
                StatusCode::Fail
            );
            assert_eq!(participant_count(&manager, "1").await, 1);

            assert_eq!(
                manager.remove_participant(&participant, "1").await,
                StatusCode::Ok
            );
            assert_eq!(participant_count(&manager, "1").await, 0);

            assert_eq!(manager.delete_event("1").await, StatusCode::Ok);
            assert_eq!(manager.get_event("1").await.0, StatusCode::NotFound);
        }
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        for manager in managers() {
            let other = manager.clone();
            other.add_event(standup()).await;

            assert_eq!(manager.get_event("1").await.0, StatusCode::Ok);
        }
    }
}
