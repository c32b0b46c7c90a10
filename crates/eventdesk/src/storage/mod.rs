//! Storage backend implementations.
//!
//! Concrete implementations of [`EventRepository`](eventdesk_core::storage::EventRepository):
//!
//! - [`inmemory`]: events in a `HashMap` keyed by event ID
//! - [`list`]: events in a `Vec`, found by linear search
//!
//! Both backends list events in insertion order and apply the configured
//! [`ParticipantPolicy`](eventdesk_core::storage::ParticipantPolicy).

pub mod inmemory;
pub mod list;

pub use inmemory::InMemoryRepository;
pub use list::ListRepository;
