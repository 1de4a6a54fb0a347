//! Request and response types for the conversations API.
//!
//! These types mirror the server's API contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Conversations
// ─────────────────────────────────────────────────────────────────────────────

/// A conversation resource.
///
/// The `id` is assigned by the server: it is empty on a locally constructed
/// value and set by a successful `create` or `get`. Once assigned it is never
/// overwritten by later hydration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Server-assigned identifier. Empty until the conversation exists
    /// server-side.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Unique conversation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Arbitrary conversation properties.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, serde_json::Value>,
    /// Any other fields the server echoes back.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Conversation {
    /// Create an empty conversation (no fields set, no id yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set a property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Replace this conversation's fields with the ones the server echoed.
    ///
    /// An already-assigned id is kept; only an empty id is filled in.
    pub(crate) fn hydrate(&mut self, echoed: Conversation) {
        if self.id.is_empty() {
            self.id = echoed.id;
        }
        self.name = echoed.name;
        self.display_name = echoed.display_name;
        self.properties = echoed.properties;
        self.extra = echoed.extra;
    }
}

/// Reference to a conversation: either a bare id or a full entity.
///
/// Resolved into a canonical [`Conversation`] at the API boundary, so the
/// operations themselves only ever deal with one shape.
#[derive(Debug, Clone)]
pub enum ConversationRef {
    /// A server-assigned identifier.
    Id(String),
    /// A full conversation entity.
    Entity(Conversation),
}

impl ConversationRef {
    /// The referenced conversation id (empty when unset).
    pub fn id(&self) -> &str {
        match self {
            ConversationRef::Id(id) => id,
            ConversationRef::Entity(conversation) => &conversation.id,
        }
    }

    /// Resolve into a canonical entity.
    pub(crate) fn into_conversation(self) -> Conversation {
        match self {
            ConversationRef::Id(id) => Conversation {
                id,
                ..Default::default()
            },
            ConversationRef::Entity(conversation) => conversation,
        }
    }
}

impl From<&str> for ConversationRef {
    fn from(id: &str) -> Self {
        ConversationRef::Id(id.to_string())
    }
}

impl From<String> for ConversationRef {
    fn from(id: String) -> Self {
        ConversationRef::Id(id)
    }
}

impl From<Conversation> for ConversationRef {
    fn from(conversation: Conversation) -> Self {
        ConversationRef::Entity(conversation)
    }
}

impl From<&Conversation> for ConversationRef {
    fn from(conversation: &Conversation) -> Self {
        ConversationRef::Entity(conversation.clone())
    }
}

/// Query parameters for listing conversations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Filter {
    /// Only return conversations created on or after this time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    /// Only return conversations created before this time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    /// Maximum number of conversations per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Sort order (`asc` or `desc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// One page of conversations from a list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPage {
    /// Conversations on this page.
    pub conversations: Vec<Conversation>,
    /// Page size the server applied.
    #[serde(default)]
    pub page_size: Option<usize>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// An event that occurred within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event sequence id within the conversation.
    pub id: u64,
    /// Event type (member:joined, text, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Member that produced the event.
    #[serde(default)]
    pub from: Option<String>,
    /// Type-specific event payload.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    /// When the event occurred (ISO 8601).
    #[serde(default)]
    pub timestamp: Option<String>,
}
