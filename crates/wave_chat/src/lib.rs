mod client;
mod conversations;
mod error;
mod members;
pub mod models;
mod page;
pub mod params;
mod stream;
mod wire;

pub use client::{ChatClient, ChatClientBuilder};
pub use conversations::ConversationsHandler;
pub use error::{ApiError, Error, Result, StatusCode};
pub use members::MembersHandler;
pub use page::{Page, PageLinks};
