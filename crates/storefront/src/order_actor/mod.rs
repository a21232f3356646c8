//! # Order Actor
//!
//! This module implements the Order resource actor, the single authority
//! over an order's fulfillment and payment statuses.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for
//!   [`Order`](crate::model::Order): creation validation, the status patch, and the
//!   cancel action
//! - [`actions`] - [`OrderAction`] / [`OrderActionResult`] pair
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Key Features
//!
//! - **No dependencies**: the order actor has no context dependencies (Context = ())
//! - **Uuid ids**: records are keyed by v4 uuids from the factory's id source
//! - **Atomic rules**: every status decision runs inside one actor message

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use resource_actor::ResourceActor;
use uuid::Uuid;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let next_order_id = || OrderId(Uuid::new_v4().simple().to_string());

    let (actor, generic_client) = ResourceActor::new(32, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
