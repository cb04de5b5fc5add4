use serde_derive::{Deserialize, Serialize};

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StatusLevel {
    Available,
    Unavailable,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Status {
    pub version: String,
    pub level: StatusLevel,
}

#[cfg(test)]
mod tests {
    use super::{Status, StatusLevel};
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() {
        assert_json_snapshot!(Status {
            version: "1.0.0".to_string(),
            level: StatusLevel::Available,
        }, @r###"
        {
          "version": "1.0.0",
          "level": "available"
        }
        "###);
    }
}
