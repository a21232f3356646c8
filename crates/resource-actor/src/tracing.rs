//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the entire actor system.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that show the complete request flow through the system.
//!
//! ## Configuration
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! This keeps log lines short while still providing rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final state
//! - **Entity Operations**: Create, Upsert, Get, List, Update, and custom Actions
//! - **Request Flow**: Hierarchical spans showing the complete request path
//! - **Errors**: Detailed error context with entity IDs and failure reasons
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Very verbose tracing
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## Debug Flag for Full Payload
//!
//! When you run with `RUST_LOG=debug`, request payloads are logged **once** as the actor
//! dequeues them:
//!
//! ```rust,ignore
//! debug!(?params, "Create");
//! ```
//!
//! The `?` syntax is a `tracing` macro feature that records the variable using its
//! `Debug` representation as a structured field.
//!
//! ## Workflow Trace Example
//!
//! A cancellation arriving over HTTP, with `RUST_LOG=info`:
//!
//! ```text
//! INFO cancel_order: Sending request
//! INFO Action ok id=9f0c2b size=4
//! ```
//!
//! With `RUST_LOG=debug` the same flow also shows the dequeued message:
//!
//! ```text
//! DEBUG cancel_order: Sending request
//! DEBUG Action id=9f0c2b action=Cancel { .. }
//! INFO Action ok id=9f0c2b size=4
//! ```
//!
//! Each step carries structured fields (`entity_type`, `id`, `size`) that can be filtered
//! and analyzed in production logging systems.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "order_flow:cancel_order")
        .init();
}
