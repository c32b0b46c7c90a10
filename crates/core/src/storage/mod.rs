mod error;
mod policy;
mod status_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use policy::ParticipantPolicy;
pub use status_mapping::{repository_error_to_status, result_to_status};
pub use traits::EventRepository;
