mod sms;

pub use sms::{
    AfricasTalkingSmsGateway, ISmsGateway, InMemorySmsGateway, OutboundSms, SmsGatewayError,
};
