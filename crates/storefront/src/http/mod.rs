//! # HTTP Surface
//!
//! REST interface over the actor clients. Split into:
//!
//! - [`api`] - router, handlers, and the server entry point
//! - [`auth`] - bearer-token extractors ([`Caller`](crate::model::Caller)
//!   and [`Admin`])
//! - [`error`] - [`ApiError`] and the error envelope
//!
//! Handlers stay thin: authenticate, parse, delegate to a client facade,
//! wrap the result. Permission decisions that must be atomic with a write
//! live in the actors, not here.

pub mod api;
pub mod auth;
pub mod error;

pub use api::*;
pub use auth::Admin;
pub use error::*;
