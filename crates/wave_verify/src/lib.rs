mod client;
mod error;

pub use client::{CheckResult, StartVerification, Verification, VerifyClient};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
