mod operations;
mod status;
mod types;

pub use operations::{register_participant, unregister_participant};
pub use status::StatusCode;
pub use types::{Event, Participant};
