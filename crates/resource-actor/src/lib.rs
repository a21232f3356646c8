//! # Resource Actor
//!
//! This crate provides the foundational building blocks for creating type-safe, concurrent
//! actor systems in Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern
//! on top of the **Actor Model**, providing a clean abstraction for managing stateful records.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard store operations (Create, Upsert, Get, List, Update) on well-defined resources
//! - Predictable lifecycle management
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! ### The Synergy
//!
//! Each resource type (Order, Rating, …) gets its own actor with completely isolated state.
//! Because an actor handles one message at a time, a precondition check and the write it
//! guards always land in the same message: no other request can slip in between. That is
//! the atomic read-validate-write a transactional store would give you, without the store.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Resource-Oriented Architecture](https://www.ics.uci.edu/~fielding/pubs/dissertation/rest_arch_style.htm) - Roy Fielding's dissertation on REST/ROA principles
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`]) - Type-safe communication
//!
//! This separation means you write your business logic **once** in the entity trait,
//! and the framework handles all the async message passing, error handling, and state
//! management.
//!
//! ## Core Abstractions
//!
//! ### [`ActorEntity`] - The Business Logic
//!
//! Define what your actor manages and how it behaves:
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! // 1. Define the Entity
//! #[derive(Clone, Debug)]
//! struct Customer {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct CustomerCreate { name: String }
//! #[derive(Debug)] struct CustomerUpdate { name: Option<String> }
//! #[derive(Debug)] enum CustomerAction {}
//! #[derive(Debug)] struct CustomerFilter;
//! #[derive(Debug)] struct CustomerError(String);
//!
//! impl std::fmt::Display for CustomerError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//! impl std::error::Error for CustomerError {}
//!
//! #[async_trait]
//! impl ActorEntity for Customer {
//!     type Id = u32;
//!     type Create = CustomerCreate;
//!     type Update = CustomerUpdate;
//!     type Action = CustomerAction;
//!     type ActionResult = ();
//!     type Filter = CustomerFilter;
//!     type Context = ();
//!     type Error = CustomerError;
//!
//!     fn from_create_params(id: u32, params: CustomerCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn matches(&self, _filter: &CustomerFilter) -> bool { true }
//!
//!     async fn on_update(&mut self, update: CustomerUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: CustomerAction, _: &Self::Context) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     // Create actor and client; ids come from the closure you supply
//!     let mut next = 0u32;
//!     let (actor, client) = ResourceActor::<Customer>::new(10, move || { next += 1; next });
//!
//!     // Spawn the actor
//!     tokio::spawn(actor.run(()));
//!
//!     // Use the client
//!     let id = client.create(CustomerCreate { name: "Alice".into() }).await.unwrap();
//!     let customer = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(customer.name, "Alice");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! This "late binding" pattern solves circular dependencies:
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! // --- Define Minimal Entities ---
//! #[derive(Clone, Debug)] struct Customer { id: u32 }
//! # #[derive(Debug)] struct CustomerCreate;
//! # #[derive(Debug)] struct CustomerUpdate;
//! # #[derive(Debug)] enum CustomerAction {}
//! # #[derive(Debug)] struct CustomerFilter;
//! # #[derive(Debug)] struct CustomerError;
//! # impl std::fmt::Display for CustomerError { fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "Err") } }
//! # impl std::error::Error for CustomerError {}
//! # #[async_trait]
//! # impl ActorEntity for Customer {
//! #     type Id = u32; type Create = CustomerCreate; type Update = CustomerUpdate; type Action = CustomerAction;
//! #     type ActionResult = (); type Filter = CustomerFilter; type Context = (); type Error = CustomerError;
//! #     fn from_create_params(id: u32, _: CustomerCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//! #     fn matches(&self, _: &CustomerFilter) -> bool { true }
//! #     async fn on_update(&mut self, _: CustomerUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! #     async fn handle_action(&mut self, _: CustomerAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! # }
//!
//! #[derive(Clone, Debug)] struct Invoice { id: u32 }
//! // Invoice depends on the Customer client
//! type InvoiceContext = ResourceClient<Customer>;
//!
//! #[derive(Debug)] struct InvoiceCreate;
//! #[derive(Debug)] struct InvoiceUpdate;
//! #[derive(Debug)] enum InvoiceAction {}
//! #[derive(Debug)] struct InvoiceFilter;
//! #[derive(Debug)] struct InvoiceError;
//! impl std::fmt::Display for InvoiceError { fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "Err") } }
//! impl std::error::Error for InvoiceError {}
//!
//! #[async_trait]
//! impl ActorEntity for Invoice {
//!     type Id = u32; type Create = InvoiceCreate; type Update = InvoiceUpdate; type Action = InvoiceAction;
//!     type ActionResult = (); type Filter = InvoiceFilter; type Context = InvoiceContext; type Error = InvoiceError;
//!
//!     fn from_create_params(id: u32, _: InvoiceCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn matches(&self, _: &InvoiceFilter) -> bool { true }
//!     async fn on_update(&mut self, _: InvoiceUpdate, _: &InvoiceContext) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: InvoiceAction, _: &InvoiceContext) -> Result<(), Self::Error> { Ok(()) }
//!     // In a real app, on_create would use the context to validate the customer
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Create all actors (no dependencies yet)
//!     let mut next_customer = 0u32;
//!     let (customer_actor, customer_client) =
//!         ResourceActor::<Customer>::new(10, move || { next_customer += 1; next_customer });
//!     let mut next_invoice = 0u32;
//!     let (invoice_actor, invoice_client) =
//!         ResourceActor::<Invoice>::new(10, move || { next_invoice += 1; next_invoice });
//!
//!     // 2. Wire dependencies when starting actors
//!     tokio::spawn(customer_actor.run(()));
//!     // Invoice actor gets the client it needs
//!     tokio::spawn(invoice_actor.run(customer_client));
//!
//!     // 3. Use the actor
//!     let _ = invoice_client.create(InvoiceCreate).await;
//! }
//! ```
//!
//! ## Type Safety
//!
//! The framework leverages Rust's type system to eliminate entire classes of runtime errors:
//!
//! - **Compile-time guarantees**: Can't send wrong message types to actors
//! - **Type-safe errors**: Each entity defines its own error type
//! - **No stringly-typed APIs**: IDs, actions, filters, and results are all strongly typed
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel** (true concurrency)
//! - No shared mutable state (message passing only)
//!
//! ## Testing
//!
//! The framework provides a **MockClient** type that implements the same `ResourceClient<T>`
//! API as the real client but operates entirely in-memory. It lets you write fast,
//! deterministic unit tests for client logic without spawning any actors. See the [`mock`]
//! module for the full API and usage patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
