//! # Rating Actor
//!
//! This module implements the Rating resource actor, the store behind the
//! review aggregation surface.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for
//!   [`Rating`](crate::model::Rating): score validation, the (author, product)
//!   upsert key, and the reply action
//! - [`actions`] - [`RatingAction`] / [`RatingActionResult`] pair
//! - [`error`] - [`RatingError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Key Features
//!
//! - **No dependencies**: the rating actor has no context dependencies (Context = ())
//! - **Uuid ids**: records are keyed by v4 uuids from the factory's id source
//! - **Insertion order**: product listings come back in submission order

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RatingClient;
use crate::model::{Rating, RatingId};
use resource_actor::ResourceActor;
use uuid::Uuid;

/// Creates a new Rating actor and its client.
pub fn new() -> (ResourceActor<Rating>, RatingClient) {
    let next_rating_id = || RatingId(Uuid::new_v4().simple().to_string());

    let (actor, generic_client) = ResourceActor::new(32, next_rating_id);
    let client = RatingClient::new(generic_client);

    (actor, client)
}
