//! Core types for the Tinyhost inbox viewer.
//!
//! Defines the mailbox query and its validation, the message record returned
//! by Tinyhost, verification-code extraction, and the page controller.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod code;
pub mod error;
pub mod inbox;
pub mod message;
pub mod query;

pub use code::extract_code;
pub use error::CoreError;
pub use inbox::{CodeLookup, FetchFailure, InboxController, InboxSource, Phase};
pub use message::{InboxListing, Message, MessageDate, MessageId};
pub use query::MailboxQuery;
