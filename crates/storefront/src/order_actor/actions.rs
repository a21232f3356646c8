//! Custom actions for the Order actor.
//!
//! This module defines the domain-specific operations that can be performed
//! on an [`Order`](crate::model::Order) beyond standard reads and status
//! patches. Actions run inside the actor, so their precondition check and
//! write cannot interleave with another request.

use crate::model::{Caller, Order};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Cancels the order on behalf of `caller`.
    ///
    /// Permitted only while fulfillment is still `PendingConfirmation`, and
    /// only for the order's owner or an admin. The payment record is left
    /// untouched so refund bookkeeping stays intact.
    ///
    /// Returns the updated order.
    Cancel { caller: Caller },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// Result from Cancel action - the order after the status change.
    Cancel(Order),
}
