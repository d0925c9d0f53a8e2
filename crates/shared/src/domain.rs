use serde::{Deserialize, Serialize};

use crate::error::ModelError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(MessageId);

/// Opaque identifier of a message author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadKind {
    #[default]
    Direct,
    Group,
}

impl ThreadKind {
    pub fn is_group(self) -> bool {
        matches!(self, ThreadKind::Group)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    SharedContact,
    Audio,
    Document,
    Thumbnail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: MessageId,
    pub timestamp: i64,
    pub is_outgoing: bool,
    pub sender: Address,
    #[serde(default)]
    pub is_update: bool,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub has_quote: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentKind>,
    #[serde(default)]
    pub expires_in_ms: i64,
    #[serde(default = "default_secure")]
    pub is_secure: bool,
    #[serde(default)]
    pub is_failed: bool,
    #[serde(default)]
    pub pending_insecure_fallback: bool,
}

fn default_secure() -> bool {
    true
}

impl MessageRecord {
    pub fn new(id: MessageId, timestamp: i64, is_outgoing: bool, sender: Address) -> Self {
        Self {
            id,
            timestamp,
            is_outgoing,
            sender,
            is_update: false,
            body: String::new(),
            has_quote: false,
            attachments: Vec::new(),
            expires_in_ms: 0,
            is_secure: true,
            is_failed: false,
            pending_insecure_fallback: false,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_quote(mut self) -> Self {
        self.has_quote = true;
        self
    }

    pub fn with_attachment(mut self, kind: AttachmentKind) -> Self {
        self.attachments.push(kind);
        self
    }

    pub fn as_update(mut self) -> Self {
        self.is_update = true;
        self
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn has_attachment(&self, kind: AttachmentKind) -> bool {
        self.attachments.contains(&kind)
    }

    /// Rejects records the grouping policy must never see.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.sender.as_str().trim().is_empty() {
            return Err(ModelError::MissingSender { id: self.id });
        }
        if self.timestamp < 0 {
            return Err(ModelError::NegativeTimestamp {
                id: self.id,
                timestamp: self.timestamp,
            });
        }
        if self.expires_in_ms < 0 {
            return Err(ModelError::NegativeExpiry {
                id: self.id,
                expires_in_ms: self.expires_in_ms,
            });
        }
        Ok(())
    }
}

/// A chronologically ordered conversation as handed to the layout pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thread {
    #[serde(default)]
    pub kind: ThreadKind,
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
}

impl Thread {
    pub fn new(kind: ThreadKind, messages: Vec<MessageRecord>) -> Self {
        Self { kind, messages }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let mut previous: Option<&MessageRecord> = None;
        for message in &self.messages {
            message.validate()?;
            if let Some(prev) = previous {
                if message.timestamp < prev.timestamp {
                    return Err(ModelError::OutOfOrder {
                        id: message.id,
                        timestamp: message.timestamp,
                        previous: prev.id,
                        previous_timestamp: prev.timestamp,
                    });
                }
            }
            previous = Some(message);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
