//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`](resource_actor::ActorEntity)
//! implementation that lets the order actor manage [`Order`] records. All
//! status rules run here, inside the actor's message loop, so a precondition
//! check and the write it guards can never interleave with another request.

use crate::model::{
    FulfillmentStatus, Order, OrderCreate, OrderFilter, OrderId, PaymentStatus, StatusPatch,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = StatusPatch;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    /// Builds the order record, deriving the money figures from the line
    /// items. New orders always start `PendingConfirmation` and `Unpaid`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::Validation("order has no line items".to_string()));
        }
        let subtotal: u64 = params
            .items
            .iter()
            .map(|item| item.unit_price * u64::from(item.quantity))
            .sum();
        if params.discount > subtotal {
            return Err(OrderError::Validation(format!(
                "discount {} exceeds subtotal {}",
                params.discount, subtotal
            )));
        }

        Ok(Self {
            id,
            code: params.code,
            customer: params.customer,
            items: params.items,
            shipping: params.shipping,
            subtotal,
            discount: params.discount,
            total: subtotal - params.discount,
            fulfillment: FulfillmentStatus::PendingConfirmation,
            payment_method: params.payment_method,
            payment: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::ByCustomer(customer) => self.customer == *customer,
        }
    }

    /// Applies a [`StatusPatch`] from the fulfillment collaborator.
    ///
    /// Both legs are validated against the transition tables before either
    /// field is written, so a patch either lands whole or not at all.
    async fn on_update(
        &mut self,
        patch: StatusPatch,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(next) = patch.fulfillment {
            if !self.fulfillment.can_transition(next) {
                return Err(OrderError::InvalidState(format!(
                    "fulfillment cannot move from {:?} to {next:?}",
                    self.fulfillment
                )));
            }
        }
        if let Some(next) = patch.payment {
            if !self.payment.can_transition(next) {
                return Err(OrderError::InvalidState(format!(
                    "payment cannot move from {:?} to {next:?}",
                    self.payment
                )));
            }
        }

        if let Some(next) = patch.fulfillment {
            self.fulfillment = next;
        }
        if let Some(next) = patch.payment {
            self.payment = next;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Cancel { caller } => {
                // Ownership failures read as NotFound so strangers cannot
                // probe which order ids exist.
                if !self.accessible_by(&caller) {
                    return Err(OrderError::NotFound(self.id.to_string()));
                }
                if self.fulfillment != FulfillmentStatus::PendingConfirmation {
                    return Err(OrderError::InvalidState(format!(
                        "order in {:?} can no longer be cancelled",
                        self.fulfillment
                    )));
                }
                // Payment is deliberately untouched: a paid-then-cancelled
                // order keeps its payment record for refund bookkeeping.
                self.fulfillment = FulfillmentStatus::Cancelled;
                Ok(OrderActionResult::Cancel(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Caller, LineItem, PaymentMethod, ShippingSnapshot};
    use resource_actor::ActorEntity;

    fn create_params(customer: &str) -> OrderCreate {
        OrderCreate {
            customer: customer.to_string(),
            code: None,
            items: vec![
                LineItem {
                    product: "p-1".to_string(),
                    name: "Margherita".to_string(),
                    unit_price: 100_000,
                    quantity: 2,
                    image: None,
                },
                LineItem {
                    product: "p-2".to_string(),
                    name: "Quattro Formaggi".to_string(),
                    unit_price: 50_000,
                    quantity: 1,
                    image: None,
                },
            ],
            shipping: ShippingSnapshot {
                recipient: "Alice".to_string(),
                phone: "555-0100".to_string(),
                address: "12 Elm St".to_string(),
            },
            discount: 0,
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }

    fn build(customer: &str, discount: u64) -> Order {
        let mut params = create_params(customer);
        params.discount = discount;
        Order::from_create_params(OrderId("o-1".to_string()), params).unwrap()
    }

    #[test]
    fn create_derives_totals_and_opens_pending_unpaid() {
        let order = build("alice", 50_000);
        assert_eq!(order.subtotal, 250_000);
        assert_eq!(order.discount, 50_000);
        assert_eq!(order.total, 200_000);
        assert_eq!(order.fulfillment, FulfillmentStatus::PendingConfirmation);
        assert_eq!(order.payment, PaymentStatus::Unpaid);
    }

    #[test]
    fn create_rejects_empty_items() {
        let mut params = create_params("alice");
        params.items.clear();
        let err = Order::from_create_params(OrderId("o-1".to_string()), params).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[test]
    fn create_rejects_discount_above_subtotal() {
        let mut params = create_params("alice");
        params.discount = 1_000_000;
        let err = Order::from_create_params(OrderId("o-1".to_string()), params).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[tokio::test]
    async fn cancel_requires_pending_confirmation() {
        let mut order = build("alice", 0);
        order.fulfillment = FulfillmentStatus::Shipping;

        let err = order
            .handle_action(
                OrderAction::Cancel {
                    caller: Caller::customer("alice"),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.fulfillment, FulfillmentStatus::Shipping);
    }

    #[tokio::test]
    async fn cancel_by_stranger_reads_as_not_found() {
        let mut order = build("alice", 0);

        let err = order
            .handle_action(
                OrderAction::Cancel {
                    caller: Caller::customer("mallory"),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::NotFound(_)));
        assert_eq!(order.fulfillment, FulfillmentStatus::PendingConfirmation);
    }

    #[tokio::test]
    async fn cancel_leaves_payment_untouched() {
        let mut order = build("alice", 0);
        order.payment = PaymentStatus::Failed;

        let OrderActionResult::Cancel(updated) = order
            .handle_action(
                OrderAction::Cancel {
                    caller: Caller::customer("alice"),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(updated.fulfillment, FulfillmentStatus::Cancelled);
        assert_eq!(updated.payment, PaymentStatus::Failed);
    }

    #[tokio::test]
    async fn status_patch_validates_both_legs_before_writing_either() {
        let mut order = build("alice", 0);

        // Legal fulfillment leg, illegal payment leg: nothing may change.
        let err = order
            .on_update(
                StatusPatch {
                    fulfillment: Some(FulfillmentStatus::Shipping),
                    payment: Some(PaymentStatus::Unpaid),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.fulfillment, FulfillmentStatus::PendingConfirmation);
        assert_eq!(order.payment, PaymentStatus::Unpaid);

        // Both legs legal: both land.
        order
            .on_update(
                StatusPatch {
                    fulfillment: Some(FulfillmentStatus::Shipping),
                    payment: Some(PaymentStatus::Succeeded),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(order.fulfillment, FulfillmentStatus::Shipping);
        assert_eq!(order.payment, PaymentStatus::Succeeded);
    }

    #[tokio::test]
    async fn status_patch_cannot_leave_terminal_states() {
        let mut order = build("alice", 0);
        order.fulfillment = FulfillmentStatus::Completed;

        let err = order
            .on_update(
                StatusPatch {
                    fulfillment: Some(FulfillmentStatus::Shipping),
                    payment: None,
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidState(_)));
        assert_eq!(order.fulfillment, FulfillmentStatus::Completed);
    }
}
