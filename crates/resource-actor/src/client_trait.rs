//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get` and `list`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// common operations like `get` and `list`. Write paths stay on the concrete
/// client, where the domain decides what a create or an action means.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// // 1. Define Entity
/// #[derive(Clone, Debug)]
/// struct User { id: u32 }
/// #[derive(Debug)] struct UserCreate;
/// #[derive(Debug)] struct UserUpdate;
/// #[derive(Debug)] enum UserAction {}
/// #[derive(Debug)] struct UserFilter;
/// #[derive(Debug)] struct UserError(String);
///
/// impl std::fmt::Display for UserError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for UserError {}
///
/// #[async_trait]
/// impl ActorEntity for User {
///     type Id = u32;
///     type Create = UserCreate;
///     type Update = UserUpdate;
///     type Action = UserAction;
///     type ActionResult = ();
///     type Filter = UserFilter;
///     type Context = ();
///     type Error = UserError;
///
///     fn from_create_params(id: u32, _: UserCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     fn matches(&self, _: &UserFilter) -> bool { true }
///     async fn on_update(&mut self, _: UserUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: UserAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// // 2. Define Client Wrapper
/// struct UserClient {
///     inner: ResourceClient<User>,
/// }
///
/// // 3. Implement ActorClient
/// #[async_trait]
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///
///     fn inner(&self) -> &ResourceClient<User> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         UserError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: UserClient) {
///     // get() and list() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.list(UserFilter).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    ///
    /// Implementations typically downcast [`FrameworkError::EntityError`]
    /// back to their own error enum and fold the channel variants into a
    /// retryable case.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch all entities matching a filter, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }
}
