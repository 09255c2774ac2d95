use serde::{Deserialize, Serialize};

use crate::link::segment::LinkMatch;
use crate::ui::surface::InteractionContext;

/// Who authored a transcript entry, which also decides how the entry may be
/// interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MessageRole {
    /// A message the local user sent. Own messages can be flagged for
    /// deletion.
    Own,
    /// A message received from the other side of the conversation.
    Peer,
    /// A tip notice; copying one requests the tip confirmation UI instead
    /// of the general copy confirmation.
    Tip,
    /// App-authored notice, not part of the conversation.
    Notice,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::Own => "own",
            MessageRole::Peer => "peer",
            MessageRole::Tip => "tip",
            MessageRole::Notice => "notice",
        }
    }

    /// Label rendered ahead of the message body.
    pub fn label(self) -> &'static str {
        match self {
            MessageRole::Own => "You",
            MessageRole::Peer => "Peer",
            MessageRole::Tip => "Tip",
            MessageRole::Notice => "*",
        }
    }

    pub fn is_tip(self) -> bool {
        self == MessageRole::Tip
    }

    pub fn deletable(self) -> bool {
        self == MessageRole::Own
    }
}

impl TryFrom<&str> for MessageRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "own" => Ok(MessageRole::Own),
            "peer" => Ok(MessageRole::Peer),
            "tip" => Ok(MessageRole::Tip),
            "notice" => Ok(MessageRole::Notice),
            _ => Err(format!("invalid message role: {value}")),
        }
    }
}

impl TryFrom<String> for MessageRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<MessageRole> for String {
    fn from(value: MessageRole) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn own(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Own, content)
    }

    pub fn peer(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Peer, content)
    }

    pub fn tip(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Tip, content)
    }

    pub fn notice(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Notice, content)
    }

    /// Interaction flags and match list for one render pass. The context is
    /// rebuilt every pass and discarded with it.
    pub fn interaction<'a>(&self, matches: &'a [LinkMatch]) -> InteractionContext<'a> {
        InteractionContext {
            tip: self.role.is_tip(),
            deletable: self.role.deletable(),
            matches,
        }
    }
}
