//! API endpoint implementations.

mod conversations;

pub use conversations::ConversationsApi;
