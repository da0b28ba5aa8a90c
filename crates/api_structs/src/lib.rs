mod reminder;
mod shared;
mod sms;
mod status;

pub mod dtos {
    pub use crate::reminder::dtos::*;
}

pub use crate::reminder::api::*;
pub use crate::shared::ActionResponse;
pub use crate::sms::api::*;
pub use crate::status::api::*;
