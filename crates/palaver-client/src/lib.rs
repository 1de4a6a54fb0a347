//! HTTP client SDK for the Palaver conversations API.
//!
//! This crate provides a typed client for the `/v0.1/conversations` endpoints.
//!
//! # Example
//!
//! ```no_run
//! use palaver_client::{Conversation, PalaverClient, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = PalaverClient::builder()
//!     .base_url("https://api.palaver.example")
//!     .auth_token("secret")
//!     .build()?;
//!
//! // Create a conversation
//! let conversation = client
//!     .conversations()
//!     .create(Conversation::named("customer-support"))
//!     .await?;
//! println!("Created conversation: {}", conversation.id);
//!
//! // Fetch it back by id
//! let conversation = client.conversations().get(conversation.id.as_str()).await?;
//!
//! // Walk its events
//! for event in client.conversations().events(&conversation).await? {
//!     println!("{}: {}", event.id, event.kind);
//! }
//!
//! // Delete it
//! client.conversations().delete(&conversation).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Conversations**: create, get, list (with optional filter), update,
//!   delete
//! - **Events**: list the events of a conversation
//!
//! Every operation is a single HTTP round trip: no retries, no pagination
//! cursors, no client-side state. Non-2xx responses surface as
//! [`Error`](crate::Error) values carrying the status code and the server's
//! error message.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::ConversationsApi;
pub use client::{ClientBuilder, PalaverClient};
pub use error::{Error, Result};
pub use types::*;
