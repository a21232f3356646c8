//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Order, Rating, …) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, DTOs, actions, filters, context, and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_upsert`, `handle_action`). Implementing this trait enables
//! the framework to offer a uniform store + Action API for any domain model.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all resource types must satisfy, the
//! `ResourceActor` logic is written *once* and reused everywhere. Associated types
//! (type Id, type Create, etc.) enforce type safety: an `Order` entity requires an
//! `OrderCreate` payload, and you cannot accidentally send it a `RatingCreate` payload.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default implementations):
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::upsert_filter`]
//! - [`ActorEntity::on_upsert`]
//!
//! You do **not** need to implement these unless you want the behavior. The default
//! `on_create` does nothing, and the default `upsert_filter` (returning `None`) makes
//! `Upsert` behave exactly like `Create`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling
/// other actors). It also defines a `Context` type, which is injected into every hook. This
/// allows "Late Binding" of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    /// Values come from the id source closure given to `ResourceActor::new`,
    /// so the framework imposes no construction scheme of its own.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Cancel`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Query payload for `List` requests, matched against each record by
    /// [`ActorEntity::matches`].
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    /// Must implement std::error::Error for proper error propagation.
    ///
    /// # Design Note: Error Granularity
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor)
    /// rather than a specific error per action. The enum must be the union of everything
    /// the entity's hooks can raise, and clients pattern match on that single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies `filter`. Backs the `List` request.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Natural key for `Upsert` requests, derived from the create payload.
    ///
    /// Returning `Some(filter)` makes the actor look for an existing record
    /// matching that filter and merge into it via [`ActorEntity::on_upsert`]
    /// instead of creating a duplicate. The default (`None`) turns `Upsert`
    /// into a plain create.
    fn upsert_filter(_params: &Self::Create) -> Option<Self::Filter> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called when an `Upsert` request matched this existing record.
    /// Merge the relevant payload fields into `self`; anything not merged
    /// here keeps its stored value.
    async fn on_upsert(
        &mut self,
        _params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
