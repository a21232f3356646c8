//! # Order Client
//!
//! Provides a high-level API for interacting with the Order actor: the
//! order lifecycle surface of the service. It wraps a
//! `ResourceClient<Order>` and owns the read-side ownership rules; the
//! write-side rules (cancel, status patch) run inside the actor where they
//! are atomic with the write.

use crate::model::{Caller, Order, OrderCreate, OrderFilter, OrderId, RepaymentIntent, StatusPatch};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Read projections check ownership here, after the read; mutations carry
/// the caller into the actor so the check travels with the write.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places a new order at the checkout boundary.
    ///
    /// The record opens `PendingConfirmation`/`Unpaid`; totals are derived
    /// from the line items inside the actor. Returns the new order's id.
    #[instrument(skip(self, params))]
    pub async fn place(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(customer = %params.customer, items = params.items.len(), "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Order detail, visible to the owner and to admins.
    ///
    /// An order that exists but belongs to someone else reads as
    /// `NotFound`, exactly like one that never existed.
    #[instrument(skip(self, caller))]
    pub async fn detail(&self, id: OrderId, caller: &Caller) -> Result<Order, OrderError> {
        let order = self
            .get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        if !order.accessible_by(caller) {
            return Err(OrderError::NotFound(id.to_string()));
        }
        Ok(order)
    }

    /// The caller's order history, newest first.
    #[instrument(skip(self, caller))]
    pub async fn list_for(&self, caller: &Caller) -> Result<Vec<Order>, OrderError> {
        let mut orders = self
            .list(OrderFilter::ByCustomer(caller.user.clone()))
            .await?;
        // The store hands back creation order; history reads newest first.
        orders.reverse();
        Ok(orders)
    }

    /// Cancels the order while it is still awaiting confirmation.
    ///
    /// The ownership and status checks run inside the actor, in the same
    /// message as the write, so a racing fulfillment update cannot slip in
    /// between. Payment is left untouched.
    #[instrument(skip(self, caller))]
    pub async fn cancel(&self, id: OrderId, caller: &Caller) -> Result<Order, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(
                id,
                OrderAction::Cancel {
                    caller: caller.clone(),
                },
            )
            .await
            .map_err(Self::map_error)?;
        let OrderActionResult::Cancel(order) = result;
        Ok(order)
    }

    /// Collects everything a payment retry needs, without writing anything.
    ///
    /// Permitted while money is still owed (`Unpaid` or `Failed`) and the
    /// order is not cancelled.
    #[instrument(skip(self, caller))]
    pub async fn request_repayment(
        &self,
        id: OrderId,
        caller: &Caller,
    ) -> Result<RepaymentIntent, OrderError> {
        let order = self.detail(id, caller).await?;
        if !order.repayment_allowed() {
            return Err(OrderError::InvalidState(format!(
                "order is {:?}/{:?}; nothing to pay again",
                order.fulfillment, order.payment
            )));
        }
        Ok(RepaymentIntent {
            order: order.id,
            items: order.items,
            total: order.total,
            discount: order.discount,
            shipping: order.shipping,
        })
    }

    /// Applies a status patch from the fulfillment collaborator.
    ///
    /// Both legs of the patch are validated against the transition tables
    /// inside the actor before either is written.
    #[instrument(skip(self))]
    pub async fn apply_status(&self, id: OrderId, patch: StatusPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Recovers the typed error the entity raised; channel failures become
    /// `Transient`, the only retry-eligible class.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(foreign) => OrderError::Transient(foreign.to_string()),
            },
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            channel => OrderError::Transient(channel.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        FulfillmentStatus, LineItem, PaymentMethod, PaymentStatus, ShippingSnapshot,
    };
    use chrono::Utc;
    use resource_actor::mock::MockClient;

    fn order_owned_by(customer: &str) -> Order {
        Order {
            id: OrderId("feedbeef".to_string()),
            code: None,
            customer: customer.to_string(),
            items: vec![LineItem {
                product: "p-1".to_string(),
                name: "Margherita".to_string(),
                unit_price: 125_000,
                quantity: 2,
                image: None,
            }],
            shipping: ShippingSnapshot {
                recipient: "Bob".to_string(),
                phone: "555-0101".to_string(),
                address: "7 Oak Ave".to_string(),
            },
            subtotal: 250_000,
            discount: 0,
            total: 250_000,
            fulfillment: FulfillmentStatus::PendingConfirmation,
            payment_method: PaymentMethod::OnlineGateway,
            payment: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn detail_masks_foreign_orders_as_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId("feedbeef".to_string()))
            .return_ok(Some(order_owned_by("bob")));

        let client = OrderClient::new(mock.client());
        let err = client
            .detail(OrderId("feedbeef".to_string()), &Caller::customer("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::NotFound(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn detail_admits_the_admin() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId("feedbeef".to_string()))
            .return_ok(Some(order_owned_by("bob")));

        let client = OrderClient::new(mock.client());
        let order = client
            .detail(OrderId("feedbeef".to_string()), &Caller::admin("staff"))
            .await
            .unwrap();

        assert_eq!(order.customer, "bob");
        mock.verify();
    }

    #[tokio::test]
    async fn repayment_is_refused_for_a_cancelled_order() {
        let mut cancelled = order_owned_by("bob");
        cancelled.fulfillment = FulfillmentStatus::Cancelled;

        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId("feedbeef".to_string()))
            .return_ok(Some(cancelled));

        let client = OrderClient::new(mock.client());
        let err = client
            .request_repayment(OrderId("feedbeef".to_string()), &Caller::customer("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::InvalidState(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn repayment_intent_carries_the_checkout_fields() {
        let mut order = order_owned_by("bob");
        order.payment = PaymentStatus::Failed;
        order.discount = 50_000;
        order.total = 200_000;

        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId("feedbeef".to_string()))
            .return_ok(Some(order));

        let client = OrderClient::new(mock.client());
        let intent = client
            .request_repayment(OrderId("feedbeef".to_string()), &Caller::customer("bob"))
            .await
            .unwrap();

        assert_eq!(intent.order, OrderId("feedbeef".to_string()));
        assert_eq!(intent.total, 200_000);
        assert_eq!(intent.discount, 50_000);
        assert_eq!(intent.items.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn channel_failures_surface_as_transient() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId("feedbeef".to_string()))
            .return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let err = client
            .detail(OrderId("feedbeef".to_string()), &Caller::customer("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::Transient(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId("feedbeef".to_string()))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidState("already shipping".to_string()),
            )));

        let client = OrderClient::new(mock.client());
        let err = client
            .cancel(OrderId("feedbeef".to_string()), &Caller::customer("bob"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OrderError::InvalidState("already shipping".to_string())
        );
        mock.verify();
    }
}
