use super::{ISmsGateway, OutboundSms, SmsGatewayError};
use crate::config::SmsConfig;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;
use url::Url;

/// Recipient status codes meaning that the message was accepted:
/// 100 Processed, 101 Sent, 102 Queued
const ACCEPTED_STATUS_CODES: [i64; 3] = [100, 101, 102];

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(rename = "SMSMessageData")]
    sms_message_data: SmsMessageData,
}

#[derive(Debug, Deserialize)]
struct SmsMessageData {
    #[serde(rename = "Recipients", default)]
    recipients: Vec<Recipient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recipient {
    #[serde(default)]
    status: String,
    #[serde(default)]
    status_code: Option<i64>,
}

impl Recipient {
    fn accepted(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
            || self
                .status_code
                .map(|code| ACCEPTED_STATUS_CODES.contains(&code))
                .unwrap_or(false)
    }
}

/// Whether the messaging API accepted the message for at least one recipient
fn is_accepted(raw: &Value) -> bool {
    match serde_json::from_value::<SendMessageResponse>(raw.clone()) {
        Ok(res) => res.sms_message_data.recipients.iter().any(Recipient::accepted),
        Err(_) => false,
    }
}

/// Client for the Africa's Talking bulk messaging API
pub struct AfricasTalkingSmsGateway {
    client: Client,
    endpoint: Url,
    username: String,
    api_key: String,
}

impl AfricasTalkingSmsGateway {
    pub fn new(config: &SmsConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.gateway_url.clone(),
            username: config.username.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ISmsGateway for AfricasTalkingSmsGateway {
    async fn send(&self, sms: &OutboundSms) -> Result<Value, SmsGatewayError> {
        let mut form = vec![
            ("username", self.username.as_str()),
            ("to", sms.to.as_str()),
            ("message", sms.body.as_str()),
        ];
        if let Some(sender_id) = &sms.sender_id {
            form.push(("from", sender_id.as_str()));
        }

        let res = self
            .client
            .post(self.endpoint.clone())
            .header("apiKey", &self.api_key)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "[Network Error] SMS gateway POST error. Error message: {:?}",
                    e
                );
                e
            })?;

        let status = res.status();
        let body = res.text().await?;
        let raw = match serde_json::from_str::<Value>(&body) {
            Ok(raw) => raw,
            Err(_) if status.is_success() => {
                error!(
                    "[Unexpected Response] SMS gateway returned a non JSON body: {}",
                    body
                );
                return Err(SmsGatewayError::MalformedResponse(body));
            }
            // Error pages from the provider are usually plain text
            Err(_) => return Err(SmsGatewayError::Rejected { raw: Value::String(body) }),
        };

        if status.is_success() && is_accepted(&raw) {
            Ok(raw)
        } else {
            Err(SmsGatewayError::Rejected { raw })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
    use medireminder_domain::PhoneNumber;
    use serde_json::json;
    use std::{collections::HashMap, net::TcpListener, time::Duration};

    const ACCEPTED_BODY: &str = r#"{"SMSMessageData":{"Message":"Sent to 1/1","Recipients":[{"statusCode":101,"number":"+254712345678","status":"Success"}]}}"#;

    fn gateway(url: Url) -> AfricasTalkingSmsGateway {
        AfricasTalkingSmsGateway::new(&SmsConfig {
            api_key: "secret".into(),
            username: "sandbox".into(),
            sender_id: Some("AFYA".into()),
            gateway_url: url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn sms() -> OutboundSms {
        OutboundSms {
            to: PhoneNumber::parse("0712345678").unwrap(),
            body: "Hi Amina, this is your reminder to take: Metformin.".into(),
            sender_id: Some("AFYA".into()),
        }
    }

    fn bind() -> (TcpListener, Url) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = Url::parse(&format!("http://127.0.0.1:{}/version1/messaging", port)).unwrap();
        (listener, url)
    }

    // Responds with the given status and body to every request
    fn spawn_canned_gateway(status: StatusCode, body: &'static str) -> Url {
        let (listener, url) = bind();
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(status).body(body)
            }))
        })
        .listen(listener)
        .unwrap()
        .workers(1)
        .run();
        actix_web::rt::spawn(server);
        url
    }

    // Only accepts requests that carry the api key and the expected form
    async fn verifying_handler(
        req: HttpRequest,
        form: web::Form<HashMap<String, String>>,
    ) -> HttpResponse {
        let api_key = req.headers().get("apiKey").and_then(|v| v.to_str().ok());
        let valid = api_key == Some("secret")
            && form.get("username").map(String::as_str) == Some("sandbox")
            && form.get("to").map(String::as_str) == Some("+254712345678")
            && form.get("from").map(String::as_str) == Some("AFYA")
            && form.get("message").map(String::as_str)
                == Some("Hi Amina, this is your reminder to take: Metformin.");
        if valid {
            HttpResponse::Created().body(ACCEPTED_BODY)
        } else {
            HttpResponse::BadRequest().body("Invalid request")
        }
    }

    #[actix_web::test]
    async fn it_posts_form_and_returns_raw_response() {
        let (listener, url) = bind();
        let server = HttpServer::new(|| {
            App::new().route("/version1/messaging", web::post().to(verifying_handler))
        })
        .listen(listener)
        .unwrap()
        .workers(1)
        .run();
        actix_web::rt::spawn(server);

        let raw = gateway(url).send(&sms()).await.unwrap();
        assert_eq!(
            raw["SMSMessageData"]["Recipients"][0]["status"],
            json!("Success")
        );
    }

    #[actix_web::test]
    async fn it_rejects_json_error_response() {
        let url = spawn_canned_gateway(StatusCode::UNAUTHORIZED, r#"{"error":"Unauthorized"}"#);
        match gateway(url).send(&sms()).await {
            Err(SmsGatewayError::Rejected { raw }) => {
                assert_eq!(raw, json!({ "error": "Unauthorized" }))
            }
            res => panic!("Expected rejection, got: {:?}", res),
        }
    }

    #[actix_web::test]
    async fn it_rejects_accepted_looking_body_with_error_status() {
        let url = spawn_canned_gateway(StatusCode::INTERNAL_SERVER_ERROR, ACCEPTED_BODY);
        assert!(matches!(
            gateway(url).send(&sms()).await,
            Err(SmsGatewayError::Rejected { .. })
        ));
    }

    #[actix_web::test]
    async fn it_fails_on_non_json_success_response() {
        let url = spawn_canned_gateway(StatusCode::OK, "<html>Maintenance</html>");
        match gateway(url).send(&sms()).await {
            Err(SmsGatewayError::MalformedResponse(body)) => {
                assert_eq!(body, "<html>Maintenance</html>")
            }
            res => panic!("Expected malformed response, got: {:?}", res),
        }
    }

    #[actix_web::test]
    async fn it_rejects_plain_text_error_page() {
        let url = spawn_canned_gateway(StatusCode::BAD_GATEWAY, "Bad Gateway");
        match gateway(url).send(&sms()).await {
            Err(SmsGatewayError::Rejected { raw }) => assert_eq!(raw, json!("Bad Gateway")),
            res => panic!("Expected rejection, got: {:?}", res),
        }
    }

    #[actix_web::test]
    async fn it_fails_when_gateway_is_unreachable() {
        // Nothing listens on this port once the listener is dropped
        let (listener, url) = bind();
        drop(listener);
        assert!(matches!(
            gateway(url).send(&sms()).await,
            Err(SmsGatewayError::Transport(_))
        ));
    }

    #[test]
    fn it_accepts_successful_recipient() {
        let raw = json!({
            "SMSMessageData": {
                "Message": "Sent to 1/1 Total Cost: KES 0.8000",
                "Recipients": [{
                    "statusCode": 101,
                    "number": "+254712345678",
                    "status": "Success",
                    "cost": "KES 0.8000",
                    "messageId": "ATPid_SampleTxnId123"
                }]
            }
        });
        assert!(is_accepted(&raw));
    }

    #[test]
    fn it_accepts_queued_recipient() {
        let raw = json!({
            "SMSMessageData": {
                "Recipients": [{ "statusCode": 102, "status": "Queued" }]
            }
        });
        assert!(is_accepted(&raw));
    }

    #[test]
    fn it_rejects_failed_recipients() {
        let raw = json!({
            "SMSMessageData": {
                "Message": "Sent to 0/1 Total Cost: 0",
                "Recipients": [{
                    "statusCode": 403,
                    "number": "+254712345678",
                    "status": "InvalidPhoneNumber",
                    "cost": "0",
                    "messageId": "None"
                }]
            }
        });
        assert!(!is_accepted(&raw));
    }

    #[test]
    fn it_rejects_response_without_recipients() {
        assert!(!is_accepted(&json!({ "SMSMessageData": { "Message": "InvalidSenderId" } })));
        assert!(!is_accepted(&json!({ "error": "Unauthorized" })));
    }
}
