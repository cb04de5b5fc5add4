use serde_derive::{Deserialize, Serialize};
use std::{fmt, ops::Deref};
use uuid::Uuid;

/// Unique identifier of a recurring email job. Either supplied by the caller or generated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecurringJobId(String);

impl RecurringJobId {
    /// Generates a new random job ID (`email_job_` followed by 8 hex characters).
    pub(crate) fn generate() -> Self {
        Self(format!(
            "email_job_{}",
            &Uuid::new_v4().simple().to_string()[..8]
        ))
    }
}

impl From<String> for RecurringJobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecurringJobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Deref for RecurringJobId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RecurringJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
