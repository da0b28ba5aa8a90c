use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub status: String,
        pub timestamp: DateTime<Utc>,
    }

    impl APIResponse {
        pub fn ok(timestamp: DateTime<Utc>) -> Self {
            Self {
                status: "OK".into(),
                timestamp,
            }
        }
    }
}
