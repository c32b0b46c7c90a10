//! List-backed storage backend.
//!
//! Keeps events in a `Vec` and finds them by linear scan. Listing returns
//! insertion order.

mod repository;

pub use repository::ListRepository;
