//! # Pizza Storefront Service
//!
//! Order lifecycle, payment reconciliation, and review aggregation for a
//! pizza storefront, exposed over REST. Built on the
//! [`resource_actor`] framework: one actor per resource, sequential
//! mailboxes instead of a transactional store.
//!
//! ## Modules
//!
//! - **[model]**: Pure data structures ([`Order`](model::Order),
//!   [`Rating`](model::Rating)) with the status machines and score rules.
//! - **[order_actor]** / **[rating_actor]**: `ActorEntity` implementations
//!   plus typed errors and custom actions.
//! - **[clients]**: Type-safe wrappers ([`OrderClient`](clients::OrderClient),
//!   [`RatingClient`](clients::RatingClient)) that carry the caller and map
//!   errors back to domain types.
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem)
//!   orchestration (spawn, wire, shut down).
//! - **[http]**: axum router, bearer auth, and response envelopes.
//! - **[config]**: environment-based startup configuration.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod rating_actor;
