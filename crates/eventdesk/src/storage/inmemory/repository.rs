//! Map-backed repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventdesk_core::event::{register_participant, unregister_participant, Event, Participant};
use eventdesk_core::storage::{EventRepository, ParticipantPolicy, RepositoryError, Result};

#[derive(Debug, Default)]
struct EventTable {
    events: HashMap<String, Event>,
    /// Event IDs in insertion order.
    order: Vec<String>,
}

/// Map-backed storage for events.
///
/// Uses a `HashMap` wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Clones share the same underlying table.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<EventTable>>,
    policy: ParticipantPolicy,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty repository that rejects duplicate participants.
    pub fn new() -> Self {
        Self::with_policy(ParticipantPolicy::default())
    }

    /// Creates a new empty repository with the given participant policy.
    pub fn with_policy(policy: ParticipantPolicy) -> Self {
        Self {
            table: Arc::new(RwLock::new(EventTable::default())),
            policy,
        }
    }

    /// Returns the participant policy in effect.
    pub fn policy(&self) -> ParticipantPolicy {
        self.policy
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let table = self.table.read().await;
        Ok(table.events.get(event_id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let table = self.table.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.events.get(id))
            .cloned()
            .collect())
    }

    async fn create_event(&self, event: Event) -> Result<()> {
        let mut table = self.table.write().await;
        if table.events.contains_key(&event.event_id) {
            return Err(RepositoryError::event_already_exists(event.event_id));
        }
        tracing::debug!(event_id = %event.event_id, "Created event");
        table.order.push(event.event_id.clone());
        table.events.insert(event.event_id.clone(), event);
        Ok(())
    }

    async fn update_event(&self, event: Event) -> Result<()> {
        let mut table = self.table.write().await;
        let Some(stored) = table.events.get_mut(&event.event_id) else {
            return Err(RepositoryError::event_not_found(event.event_id));
        };
        tracing::debug!(event_id = %event.event_id, "Replaced event");
        *stored = event;
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let mut table = self.table.write().await;
        if table.events.remove(event_id).is_none() {
            return Err(RepositoryError::event_not_found(event_id));
        }
        table.order.retain(|id| id != event_id);
        tracing::debug!(%event_id, "Deleted event");
        Ok(())
    }

    async fn add_participant(&self, event_id: &str, participant: Participant) -> Result<()> {
        let mut table = self.table.write().await;
        let event = table
            .events
            .get_mut(event_id)
            .ok_or_else(|| RepositoryError::event_not_found(event_id))?;
        let email = participant.email.clone();
        register_participant(event, participant, self.policy)?;
        tracing::debug!(%event_id, %email, "Added participant");
        Ok(())
    }

    async fn remove_participant(&self, event_id: &str, email: &str) -> Result<()> {
        let mut table = self.table.write().await;
        let event = table
            .events
            .get_mut(event_id)
            .ok_or_else(|| RepositoryError::event_not_found(event_id))?;
        unregister_participant(event, email)?;
        tracing::debug!(%event_id, %email, "Removed participant");
        Ok(())
    }
}
