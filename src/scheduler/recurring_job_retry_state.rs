use serde_derive::Serialize;
use time::OffsetDateTime;

/// Tracks consecutive failed delivery attempts for a recurring email job. The state is cleared as
/// soon as a delivery succeeds; once `attempts` reaches the configured maximum, the job is dropped
/// from the table.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecurringJobRetryState {
    /// Number of consecutive failed delivery attempts.
    pub attempts: u32,
    /// Time of the latest failed attempt.
    #[serde(with = "time::serde::timestamp")]
    pub last_attempt_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::RecurringJobRetryState;
    use insta::assert_json_snapshot;
    use time::OffsetDateTime;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(RecurringJobRetryState {
            attempts: 3,
            last_attempt_at: OffsetDateTime::from_unix_timestamp(946720800)?,
        }, @r###"
        {
          "attempts": 3,
          "last_attempt_at": 946720800
        }
        "###);

        Ok(())
    }
}
