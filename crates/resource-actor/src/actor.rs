//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server half of the framework.
//! It owns the record store for one entity type and processes every incoming
//! [`ResourceRequest`] sequentially in its own Tokio task.
//!
//! # Concurrency Model
//! One actor per record type, one message at a time. Because the store is
//! owned exclusively by the task, there are no locks, and — more importantly
//! for the domain — **a precondition check and the write it guards happen
//! inside a single message**. Two concurrent cancels of the same order, or a
//! cancel racing a status update, cannot interleave: whichever message is
//! dequeued second sees the first one's write. This is the single-record
//! transaction the store contract requires, for free.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor managing a collection of records of one entity type.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer, id_source)` yields the actor
///    (server) and its [`ResourceClient`].
/// 2. **Wire**: pass the entity's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug)] struct NoteFilter;
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Filter = NoteFilter;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     fn matches(&self, _: &NoteFilter) -> bool { true }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0u32;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///     let id = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `HashMap` plus an insertion-order index, so `List` results
/// come back in creation order without re-sorting — the order the domain's
/// list queries promise. Ids come from the caller-supplied `id_source`
/// closure, which keeps id policy (counters in tests, uuids in production)
/// out of the framework.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids in insertion order; `List` scans this, not the map.
    index: Vec<T::Id>,
    id_source: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mpsc channel; senders wait when it
    ///   is full.
    /// * `id_source` - Generator invoked once per created record.
    pub fn new<F>(buffer_size: usize, id_source: F) -> (Self, ResourceClient<T>)
    where
        F: FnMut() -> T::Id + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            index: Vec::new(),
            id_source: Box::new(id_source),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Short type name for log fields (e.g. "Order" instead of
    /// "storefront::model::order::Order").
    fn entity_type() -> &'static str {
        std::any::type_name::<T>().split("::").last().unwrap_or("Unknown")
    }

    /// Runs the actor's event loop, processing messages until every client
    /// is dropped and the channel closes.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, so dependencies created
    /// after the actor (other clients, clocks) still reach it.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = Self::entity_type();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.insert_new(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Upsert { params, respond_to } => {
                    debug!(entity_type, ?params, "Upsert");
                    let result = match T::upsert_filter(&params) {
                        Some(filter) => {
                            let existing = self
                                .index
                                .iter()
                                .find(|id| {
                                    self.store
                                        .get(*id)
                                        .map(|item| item.matches(&filter))
                                        .unwrap_or(false)
                                })
                                .cloned();
                            match existing {
                                Some(id) => self.merge_existing(id, params, &context).await,
                                None => self.insert_new(params, &context).await,
                            }
                        }
                        // No natural key: upsert degenerates to create.
                        None => self.insert_new(params, &context).await,
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .index
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Shared create path for `Create` and the miss branch of `Upsert`.
    async fn insert_new(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        let id = (self.id_source)();

        match T::from_create_params(id.clone(), params) {
            Ok(mut item) => {
                if let Err(e) = item.on_create(context).await {
                    warn!(entity_type, error = %e, "on_create failed");
                    return Err(FrameworkError::EntityError(Box::new(e)));
                }
                self.store.insert(id.clone(), item);
                self.index.push(id.clone());
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    /// Merge path of `Upsert`: the natural key matched `id`.
    async fn merge_existing(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        // The id was found by the caller's scan an instant ago; the map
        // cannot have lost it since no other task touches the store.
        let Some(item) = self.store.get_mut(&id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_upsert(params, context).await {
            warn!(entity_type, %id, error = %e, "on_upsert failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        info!(entity_type, %id, "Upserted");
        Ok(id)
    }
}
