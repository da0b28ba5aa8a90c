use super::{ISmsGateway, OutboundSms, SmsGatewayError};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

/// Gateway that keeps accepted messages in memory instead of sending them.
/// Can be switched into a failing mode where every message is rejected.
#[derive(Default)]
pub struct InMemorySmsGateway {
    delivered: Mutex<Vec<OutboundSms>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl InMemorySmsGateway {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages that were accepted, in the order they were sent
    pub fn delivered(&self) -> Vec<OutboundSms> {
        self.delivered.lock().unwrap().clone()
    }

    /// Number of send calls, accepted or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ISmsGateway for InMemorySmsGateway {
    async fn send(&self, sms: &OutboundSms) -> Result<Value, SmsGatewayError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SmsGatewayError::Rejected {
                raw: json!({ "number": sms.to, "status": "Failed" }),
            });
        }

        self.delivered.lock().unwrap().push(sms.clone());
        Ok(json!({ "number": sms.to, "status": "Success" }))
    }
}
