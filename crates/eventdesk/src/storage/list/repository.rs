use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventdesk_core::event::{register_participant, unregister_participant, Event, Participant};
use eventdesk_core::storage::{EventRepository, ParticipantPolicy, RepositoryError, Result};

/// Vec-backed storage for events.
///
/// Every lookup is a linear scan, which is fine for the handful of events a
/// single process tracks.
#[derive(Debug, Clone)]
pub struct ListRepository {
    events: Arc<RwLock<Vec<Event>>>,
    policy: ParticipantPolicy,
}

impl Default for ListRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ListRepository {
    /// Creates a new empty repository that rejects duplicate participants.
    pub fn new() -> Self {
        Self::with_policy(ParticipantPolicy::default())
    }

    /// Creates a new empty repository with the given participant policy.
    pub fn with_policy(policy: ParticipantPolicy) -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            policy,
        }
    }

    pub fn policy(&self) -> ParticipantPolicy {
        self.policy
    }
}

fn position(events: &[Event], event_id: &str) -> Option<usize> {
    events.iter().position(|e| e.event_id == event_id)
}

fn find_mut<'a>(events: &'a mut [Event], event_id: &str) -> Result<&'a mut Event> {
    events
        .iter_mut()
        .find(|e| e.event_id == event_id)
        .ok_or_else(|| RepositoryError::event_not_found(event_id))
}

#[async_trait]
impl EventRepository for ListRepository {
    async fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn create_event(&self, event: Event) -> Result<()> {
        let mut events = self.events.write().await;
        if position(&events, &event.event_id).is_some() {
            return Err(RepositoryError::event_already_exists(event.event_id));
        }
        tracing::debug!(event_id = %event.event_id, "Created event");
        events.push(event);
        Ok(())
    }

    async fn update_event(&self, event: Event) -> Result<()> {
        let mut events = self.events.write().await;
        let stored = find_mut(&mut events, &event.event_id)?;
        tracing::debug!(event_id = %event.event_id, "Replaced event");
        *stored = event;
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let mut events = self.events.write().await;
        let index =
            position(&events, event_id).ok_or_else(|| RepositoryError::event_not_found(event_id))?;
        events.remove(index);
        tracing::debug!(%event_id, "Deleted event");
        Ok(())
    }

    async fn add_participant(&self, event_id: &str, participant: Participant) -> Result<()> {
        let mut events = self.events.write().await;
        let event = find_mut(&mut events, event_id)?;
        let email = participant.email.clone();
        register_participant(event, participant, self.policy)?;
        tracing::debug!(%event_id, %email, "Added participant");
        Ok(())
    }

    async fn remove_participant(&self, event_id: &str, email: &str) -> Result<()> {
        let mut events = self.events.write().await;
        let event = find_mut(&mut events, event_id)?;
        unregister_participant(event, email)?;
        tracing::debug!(%event_id, %email, "Removed participant");
        Ok(())
    }
}
