use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person attending an event, identified within that event by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other profile fields supplied by the caller, kept as-is.
    #[serde(flatten)]
    pub profile: BTreeMap<String, serde_json::Value>,
}

impl Participant {
    /// Creates a participant with only an email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            profile: BTreeMap::new(),
        }
    }

    /// Sets the display name for this participant.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches an extra profile field.
    pub fn with_profile_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Returns true if this participant has the given email.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

/// A scheduled item with a time range and its participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Attendees in insertion order.
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Creates an event with no description, location or participants.
    pub fn new(
        event_id: impl Into<String>,
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            name: name.into(),
            description: String::new(),
            location: String::new(),
            start_time,
            end_time,
            participants: Vec::new(),
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Appends a participant without any duplicate check.
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Returns the position of the first participant with the given email.
    pub fn participant_position(&self, email: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.has_email(email))
    }

    /// Returns true if a participant with the given email is registered.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participant_position(email).is_some()
    }

    /// Returns the number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
