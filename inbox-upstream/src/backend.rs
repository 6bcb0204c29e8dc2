//! Mailbox API abstraction trait.
//!
//! Lets the gateway run against the real Tinyhost service or an in-memory
//! stand-in without changing the handlers.

use async_trait::async_trait;
use inbox_core::MailboxQuery;
use serde_json::Value;

use crate::UpstreamError;

/// A service that lists the messages of a temporary mailbox.
///
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait MailboxApi: Send + Sync {
    /// Fetch one page of the mailbox, returning the JSON body untouched.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Status`] for non-success answers,
    /// [`UpstreamError::Network`] if no answer arrives and
    /// [`UpstreamError::Decode`] if a success body is not JSON.
    async fn list_emails(&self, query: &MailboxQuery) -> Result<Value, UpstreamError>;
}
