//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each wrapper exposes the domain's operations, carries the caller where a
//! permission decision is needed, and maps [`FrameworkError`](resource_actor::FrameworkError)
//! back to the resource's typed error.

pub mod order_client;
pub mod rating_client;

pub use order_client::*;
pub use rating_client::*;
