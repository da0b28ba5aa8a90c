use crate::shared::ActionResponse;
use serde::{Deserialize, Serialize};

pub mod send_sms {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub to: String,
        pub message: String,
        #[serde(default)]
        pub name: Option<String>,
    }

    /// `data` is the raw response from the SMS gateway
    pub type APIResponse = ActionResponse<serde_json::Value>;
}

pub mod send_test_sms {
    use super::*;

    pub type APIResponse = ActionResponse<serde_json::Value>;
}
