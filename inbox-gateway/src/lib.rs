//! HTTP gateway for the Tinyhost inbox viewer.
//!
//! Exposes `GET /api/emails`, a JSON proxy in front of the Tinyhost listing
//! API, and the server-rendered inbox page at `/` built on top of it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod page;
pub mod proxy;
pub mod render;
pub mod routes;
