//! Client for the Tinyhost temporary-mailbox listing API.
//!
//! [`MailboxApi`] is the seam the gateway depends on; [`TinyhostClient`] is
//! the production implementation over `reqwest`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod config;
pub mod error;
pub mod tinyhost;

pub use backend::MailboxApi;
pub use config::{UpstreamConfig, DEFAULT_BASE_URL};
pub use error::UpstreamError;
pub use tinyhost::TinyhostClient;
