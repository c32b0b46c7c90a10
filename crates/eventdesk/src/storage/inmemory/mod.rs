//! Map-backed storage backend.
//!
//! Stores events in a `HashMap` keyed by event ID, wrapped in
//! `Arc<RwLock<_>>`. A side index keeps insertion order for listing.
//! Data lives as long as the repository.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventdesk::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.create_event(event).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
