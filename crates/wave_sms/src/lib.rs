mod client;
mod error;

pub use client::{SendReceipt, SendSms, SmsClient};
pub use error::{Error, Result};
