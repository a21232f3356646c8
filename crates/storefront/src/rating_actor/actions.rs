//! Custom actions for the Rating actor.
//!
//! Only staff touch a rating after submission, and only to attach a reply.
//! The action runs inside the actor, so two racing replies resolve to
//! whichever message lands last.

use crate::model::{Caller, Rating};

/// Custom actions for Rating entities.
#[derive(Debug, Clone)]
pub enum RatingAction {
    /// Sets the admin reply on behalf of `caller`.
    ///
    /// Requires the admin capability. A rating holds at most one reply;
    /// a new one overwrites the old text and timestamp.
    ///
    /// Returns the updated rating.
    Reply { text: String, caller: Caller },
}

/// Results from RatingActions - variants match 1:1 with RatingAction
#[derive(Debug, Clone)]
pub enum RatingActionResult {
    /// Result from Reply action - the rating carrying the fresh reply.
    Reply(Rating),
}
