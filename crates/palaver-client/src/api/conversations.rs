//! Conversations API.

use crate::client::PalaverClient;
use crate::error::{Error, Result};
use crate::types::{Conversation, ConversationPage, ConversationRef, Event, Filter};

/// Conversations API client.
pub struct ConversationsApi {
    client: PalaverClient,
}

impl ConversationsApi {
    pub(crate) fn new(client: PalaverClient) -> Self {
        Self { client }
    }

    /// Create a new conversation.
    ///
    /// Returns the conversation with its server-assigned id and whatever
    /// fields the server echoed back.
    pub async fn create(&self, conversation: Conversation) -> Result<Conversation> {
        self.client.post("conversations", &conversation).await
    }

    /// Get a conversation by id or re-hydrate an existing entity.
    ///
    /// Accepts a bare id (`&str`/`String`) or a [`Conversation`]; an entity's
    /// already-assigned id is preserved while its fields are refreshed from
    /// the server.
    pub async fn get(&self, conversation: impl Into<ConversationRef>) -> Result<Conversation> {
        let mut conversation = conversation.into().into_conversation();
        if conversation.id.is_empty() {
            return Err(Error::MissingId("get"));
        }

        let echoed: Conversation = self
            .client
            .get(&format!("conversations/{}", conversation.id))
            .await?;
        conversation.hydrate(echoed);

        Ok(conversation)
    }

    /// List conversations.
    pub async fn list(&self) -> Result<ConversationPage> {
        self.client.get("conversations").await
    }

    /// List conversations matching a filter.
    pub async fn list_with_filter(&self, filter: Filter) -> Result<ConversationPage> {
        self.client.get_with_query("conversations", &filter).await
    }

    /// Update a conversation.
    ///
    /// Requires a server-assigned id. Failures always surface as errors;
    /// use `result.is_ok()` where a plain success flag is wanted.
    pub async fn update(&self, conversation: Conversation) -> Result<Conversation> {
        if conversation.id.is_empty() {
            return Err(Error::MissingId("update"));
        }

        let mut conversation = conversation;
        let echoed: Conversation = self
            .client
            .put(&format!("conversations/{}", conversation.id), &conversation)
            .await?;
        conversation.hydrate(echoed);

        Ok(conversation)
    }

    /// Delete a conversation.
    pub async fn delete(&self, conversation: impl Into<ConversationRef>) -> Result<()> {
        let reference = conversation.into();
        if reference.id().is_empty() {
            return Err(Error::MissingId("delete"));
        }

        self.client
            .delete(&format!("conversations/{}", reference.id()))
            .await
    }

    /// List the events of a conversation.
    pub async fn events(&self, conversation: impl Into<ConversationRef>) -> Result<Vec<Event>> {
        let reference = conversation.into();
        if reference.id().is_empty() {
            return Err(Error::MissingId("events"));
        }

        self.client
            .get(&format!("conversations/{}/events", reference.id()))
            .await
    }
}
