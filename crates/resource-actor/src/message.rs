//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// This enum implements a **Resource-Oriented** design pattern where each actor manages a
/// specific type of resource (the [`ActorEntity`]). Instead of defining ad-hoc messages for
/// every operation, we standardize around a set of lifecycle operations that apply to almost
/// any persistent resource.
///
/// # The Operation Set
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Upsert**: Create-or-merge. Looks up an existing record by the entity's natural key
///   ([`ActorEntity::upsert_filter`]) and merges into it, or creates when there is none.
/// - **Get (Read)**: Retrieval. Fetches the current state of the resource by ID.
/// - **List (Read)**: Retrieval. Fetches every resource matching an [`ActorEntity::Filter`],
///   in creation order.
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Action**: Extensibility. Executes a custom [`ActorEntity::Action`].
///
/// There is no Delete: the domains this framework serves retire records by status and keep
/// them readable forever.
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity`. It uses the associated types defined in the
/// [`ActorEntity`] trait (like `Create`, `Update`, `Action`) to ensure type safety for every
/// operation. This guarantees that you can't send an "Order Create" payload to a "Rating"
/// actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Upsert {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
