//! Contact-form validation and email relay

mod message;
mod relay;

pub use message::{ContactError, ContactMessage};
pub use relay::{MailError, MailSettings, Mailer, DEFAULT_RELAY_ENDPOINT};
