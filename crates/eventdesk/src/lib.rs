//! eventdesk - manage events and their participants in memory.
//!
//! The [`EventManager`] facade exposes status-code returning operations over
//! any [`EventRepository`](eventdesk_core::storage::EventRepository) backend.
//!
//! ```rust,ignore
//! use eventdesk::{Config, EventManager};
//!
//! let manager = Config::from_env().build_manager();
//! let status = manager.add_event(event).await;
//! ```

pub mod config;
pub mod manager;
pub mod storage;
pub mod telemetry;

pub use config::{Backend, Config};
pub use manager::EventManager;
