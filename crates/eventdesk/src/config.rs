use std::{env, str::FromStr, sync::Arc};

use eventdesk_core::storage::{EventRepository, ParticipantPolicy};

use crate::manager::EventManager;
use crate::storage::{InMemoryRepository, ListRepository};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// `HashMap` keyed by event ID.
    #[default]
    Map,
    /// `Vec` with linear search.
    List,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(Backend::Map),
            "list" => Ok(Backend::List),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage backend (default: map)
    pub backend: Backend,
    /// Duplicate participant handling (default: reject)
    pub participant_policy: ParticipantPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTDESK_BACKEND` - `map` or `list` (default: map)
    /// - `EVENTDESK_DUPLICATE_PARTICIPANTS` - `reject` or `allow` (default: reject)
    pub fn from_env() -> Self {
        Self {
            backend: parse_var("EVENTDESK_BACKEND"),
            participant_policy: parse_var("EVENTDESK_DUPLICATE_PARTICIPANTS"),
        }
    }

    /// Creates the configured repository.
    pub fn build_repository(&self) -> Arc<dyn EventRepository> {
        let policy = self.participant_policy;
        match self.backend {
            Backend::Map => Arc::new(InMemoryRepository::with_policy(policy)),
            Backend::List => Arc::new(ListRepository::with_policy(policy)),
        }
    }

    /// Creates an [`EventManager`] over the configured repository.
    pub fn build_manager(&self) -> EventManager {
        tracing::debug!(
            backend = ?self.backend,
            participant_policy = ?self.participant_policy,
            "Building event manager"
        );
        EventManager::new(self.build_repository())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_var<T: FromStr + Default>(name: &str) -> T {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, %value, "Ignoring invalid value, using default");
            T::default()
        }),
        Err(_) => T::default(),
    }
}
