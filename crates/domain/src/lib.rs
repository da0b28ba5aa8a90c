mod message;
mod phone;
mod reminder;
mod shared;

pub use message::{compose_message, MessageSettings};
pub use phone::{InvalidPhoneNumber, PhoneNumber, COUNTRY_CODE, TRUNK_PREFIX};
pub use reminder::{Reminder, ReminderKind, DAY_MILLIS};
pub use shared::entity::{Entity, InvalidIDError, ID};
