use async_trait::async_trait;

use crate::event::{Event, Participant};

use super::Result;

/// Repository for events and their participants.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, event_id: &str) -> Result<Option<Event>>;

    /// Lists all events in insertion order.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Creates a new event. Fails if the ID is already taken.
    async fn create_event(&self, event: Event) -> Result<()>;

    /// Replaces an existing event with the given one.
    async fn update_event(&self, event: Event) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, event_id: &str) -> Result<()>;

    /// Appends a participant to an event.
    async fn add_participant(&self, event_id: &str, participant: Participant) -> Result<()>;

    /// Removes the first participant of an event matching the given email.
    async fn remove_participant(&self, event_id: &str, email: &str) -> Result<()>;
}
