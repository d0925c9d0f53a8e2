use shared::domain::{Address, AttachmentKind, MessageRecord};

/// Read-only view of a message used to decide cluster membership.
pub trait ThreadMessage {
    fn timestamp(&self) -> i64;
    fn is_outgoing(&self) -> bool;
    fn sender(&self) -> &Address;
    fn is_update(&self) -> bool;
    fn has_body(&self) -> bool;
    fn has_quote(&self) -> bool;
}

/// Extra accessors consulted when laying out a whole conversation item.
pub trait ItemMessage: ThreadMessage {
    fn attachments(&self) -> &[AttachmentKind];
    fn expires_in_ms(&self) -> i64;
    fn is_secure(&self) -> bool;
    fn is_failed(&self) -> bool;
    fn is_pending_insecure_fallback(&self) -> bool;
}

impl ThreadMessage for MessageRecord {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn is_outgoing(&self) -> bool {
        self.is_outgoing
    }

    fn sender(&self) -> &Address {
        &self.sender
    }

    fn is_update(&self) -> bool {
        self.is_update
    }

    fn has_body(&self) -> bool {
        MessageRecord::has_body(self)
    }

    fn has_quote(&self) -> bool {
        self.has_quote
    }
}

impl ItemMessage for MessageRecord {
    fn attachments(&self) -> &[AttachmentKind] {
        &self.attachments
    }

    fn expires_in_ms(&self) -> i64 {
        self.expires_in_ms
    }

    fn is_secure(&self) -> bool {
        self.is_secure
    }

    fn is_failed(&self) -> bool {
        self.is_failed
    }

    fn is_pending_insecure_fallback(&self) -> bool {
        self.pending_insecure_fallback
    }
}
