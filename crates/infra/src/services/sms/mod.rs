mod africas_talking;
mod inmemory;

pub use africas_talking::AfricasTalkingSmsGateway;
pub use inmemory::InMemorySmsGateway;
use medireminder_domain::PhoneNumber;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundSms {
    pub to: PhoneNumber,
    pub body: String,
    pub sender_id: Option<String>,
}

#[derive(Error, Debug)]
pub enum SmsGatewayError {
    #[error("Unable to reach the SMS gateway: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The SMS gateway did not accept the message. Response: {raw}")]
    Rejected { raw: serde_json::Value },
    #[error("Unexpected response from the SMS gateway: {0}")]
    MalformedResponse(String),
}

/// Delivers text messages through an external provider.
///
/// A successful result only means that the provider accepted the message,
/// there is no tracking of delivery receipts. Failures are never retried
/// by the gateway itself.
#[async_trait::async_trait]
pub trait ISmsGateway: Send + Sync {
    /// Returns the raw provider response when the message was accepted
    async fn send(&self, sms: &OutboundSms) -> Result<serde_json::Value, SmsGatewayError>;
}
