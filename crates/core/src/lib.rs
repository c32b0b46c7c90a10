//! Functional core for eventdesk.
//!
//! Pure data types and repository traits with no I/O. Storage backends live in
//! the `eventdesk` crate and implement [`storage::EventRepository`].

pub mod event;
pub mod storage;
