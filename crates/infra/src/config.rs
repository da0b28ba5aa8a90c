use medireminder_domain::MessageSettings;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const SANDBOX_USERNAME: &str = "sandbox";
const SANDBOX_GATEWAY_URL: &str = "https://api.sandbox.africastalking.com/version1/messaging";
const LIVE_GATEWAY_URL: &str = "https://api.africastalking.com/version1/messaging";

#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Key used to authenticate against the SMS gateway
    pub api_key: String,
    /// Account identifier at the SMS gateway
    pub username: String,
    /// Sender id shown to recipients. When not set the gateway default is used.
    pub sender_id: Option<String>,
    /// Endpoint that messages are posted to
    pub gateway_url: Url,
    /// Upper bound for a single request to the gateway
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub sms: SmsConfig,
    /// Destination of the canned message sent by the `test-sms` route
    pub test_phone_number: Option<String>,
    pub messages: MessageSettings,
    /// How often due `Reminder`s are dispatched
    pub dispatch_interval: Duration,
    /// Maximum number of daily `Reminder`s that can be created by one request.
    /// This is used to avoid having clients create years of reminders
    /// by accident.
    pub max_repeat_days: usize,
}

/// Non empty value of the given environment variable
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn default_gateway_url(username: &str) -> &'static str {
    if username == SANDBOX_USERNAME {
        SANDBOX_GATEWAY_URL
    } else {
        LIVE_GATEWAY_URL
    }
}

impl SmsConfig {
    pub fn new() -> Self {
        let api_key = match env_var("SMS_API_KEY") {
            Some(key) => key,
            None => {
                warn!("Did not find SMS_API_KEY environment variable. Sending SMS is going to fail.");
                String::new()
            }
        };
        let username = env_var("SMS_USERNAME").unwrap_or_else(|| SANDBOX_USERNAME.into());
        let default_url = default_gateway_url(&username);
        let gateway_url = match env_var("SMS_GATEWAY_URL") {
            Some(url) => match Url::parse(&url) {
                Ok(url) => url,
                Err(_) => {
                    warn!(
                        "The given SMS_GATEWAY_URL: {} is not valid, falling back to the default url: {}.",
                        url, default_url
                    );
                    Url::parse(default_url).expect("Default gateway url to be valid")
                }
            },
            None => Url::parse(default_url).expect("Default gateway url to be valid"),
        };
        info!("SMS gateway for account {} is: {}", username, gateway_url);

        Self {
            api_key,
            username,
            sender_id: env_var("SMS_SENDER_ID"),
            gateway_url,
            timeout: Duration::from_secs(10),
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let test_phone_number = env_var("TEST_PHONE_NUMBER");
        if test_phone_number.is_none() {
            info!("Did not find TEST_PHONE_NUMBER environment variable. The test-sms route is disabled.");
        }

        Self {
            port,
            sms: SmsConfig::new(),
            test_phone_number,
            messages: MessageSettings {
                appointment_reply_keyword: env_var("APPOINTMENT_REPLY_KEYWORD"),
            },
            dispatch_interval: Duration::from_secs(60),
            max_repeat_days: 90,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
