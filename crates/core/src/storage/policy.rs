use std::str::FromStr;

/// How a store treats a participant whose email is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParticipantPolicy {
    /// Reject the add with an `AlreadyExists` error.
    #[default]
    RejectDuplicates,
    /// Append the participant anyway.
    AllowDuplicates,
}

impl ParticipantPolicy {
    pub fn rejects_duplicates(&self) -> bool {
        matches!(self, ParticipantPolicy::RejectDuplicates)
    }
}

impl FromStr for ParticipantPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(ParticipantPolicy::RejectDuplicates),
            "allow" => Ok(ParticipantPolicy::AllowDuplicates),
            other => Err(format!("unknown participant policy: {other}")),
        }
    }
}
