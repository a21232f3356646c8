//! # System Lifecycle & Orchestration
//!
//! Starts, wires, and shuts down the storefront's actors. Individual actors
//! are simple; this module is the conductor that owns their task handles.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when started
//! via `run(context)`. Both storefront actors are self-contained
//! (`Context = ()`): orders reference products by snapshot, not by lookup,
//! and ratings only carry ids for accounts and products owned elsewhere.
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients, closing the sender side of each channel
//! 2. Actors observe `recv() == None` and exit their loops
//! 3. Await the actor tasks
//!
//! No messages are lost: actors drain their mailboxes before exiting.

pub mod storefront_system;

pub use storefront_system::*;
