//! Order model: line items, the shipping snapshot, and the two status
//! machines (fulfillment and payment) with their transition tables.

use crate::model::{Caller, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One purchased product, priced at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: ProductId,
    pub name: String,
    /// Price per unit in minor currency units, frozen at purchase.
    pub unit_price: u64,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Shipping details captured when the order is placed. Later edits to the
/// customer's profile do not reach into existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingSnapshot {
    pub recipient: String,
    pub phone: String,
    pub address: String,
}

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    OnlineGateway,
}

/// Where the order stands in its fulfillment lifecycle.
///
/// Orders move strictly forward:
///
/// ```text
/// PendingConfirmation --> Shipping --> Delivered --> Completed
///         |
///         +--> Cancelled
/// ```
///
/// `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    PendingConfirmation,
    Shipping,
    Delivered,
    Completed,
    Cancelled,
}

impl FulfillmentStatus {
    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition(self, next: FulfillmentStatus) -> bool {
        use FulfillmentStatus::*;
        matches!(
            (self, next),
            (PendingConfirmation, Cancelled)
                | (PendingConfirmation, Shipping)
                | (Shipping, Delivered)
                | (Delivered, Completed)
        )
    }

    /// Whether no further fulfillment transitions exist.
    pub fn is_terminal(self) -> bool {
        matches!(self, FulfillmentStatus::Cancelled | FulfillmentStatus::Completed)
    }
}

/// Outcome of payment collection for an order.
///
/// `Unpaid` is the starting state only; once an attempt has been recorded
/// the order never reads as untouched again. `Failed` may be retried,
/// `Succeeded` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Succeeded,
    Failed,
}

impl PaymentStatus {
    /// Whether the payment record may move from `self` to `next`.
    pub fn can_transition(self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, next),
            (Unpaid, Succeeded) | (Unpaid, Failed) | (Failed, Succeeded) | (Failed, Failed)
        )
    }

    /// Whether money is still owed, i.e. collection may be (re)attempted.
    pub fn awaiting_payment(self) -> bool {
        matches!(self, PaymentStatus::Unpaid | PaymentStatus::Failed)
    }
}

/// A customer order with its money figures and both status machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-facing order code, if one was assigned at placement.
    pub code: Option<String>,
    pub customer: UserId,
    pub items: Vec<LineItem>,
    pub shipping: ShippingSnapshot,
    /// Sum of `unit_price * quantity` over `items`.
    pub subtotal: u64,
    pub discount: u64,
    /// Always `subtotal - discount`.
    pub total: u64,
    pub fulfillment: FulfillmentStatus,
    pub payment_method: PaymentMethod,
    pub payment: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// The code shown to customers: the assigned code when present,
    /// otherwise the last six characters of the id, uppercased.
    pub fn display_code(&self) -> String {
        match &self.code {
            Some(code) => code.clone(),
            None => {
                // Ids are ASCII hex, so byte slicing stays on char bounds.
                let id = &self.id.0;
                id[id.len().saturating_sub(6)..].to_uppercase()
            }
        }
    }

    /// Whether `caller` may see this order.
    pub fn accessible_by(&self, caller: &Caller) -> bool {
        caller.can_access(&self.customer)
    }

    /// Whether a payment retry may be prepared for this order.
    ///
    /// Money must still be owed and the order must not be cancelled.
    pub fn repayment_allowed(&self) -> bool {
        self.payment.awaiting_payment() && self.fulfillment != FulfillmentStatus::Cancelled
    }
}

/// Payload for placing a new order.
///
/// Carries no money totals: `subtotal` and `total` are derived from the
/// line items when the order record is built.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: UserId,
    pub code: Option<String>,
    pub items: Vec<LineItem>,
    pub shipping: ShippingSnapshot,
    pub discount: u64,
    pub payment_method: PaymentMethod,
}

/// Status patch applied by back-office staff.
///
/// Either leg may be omitted; when both are present they are validated
/// together and applied together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusPatch {
    #[serde(default)]
    pub fulfillment: Option<FulfillmentStatus>,
    #[serde(default)]
    pub payment: Option<PaymentStatus>,
}

/// Query descriptor for order listings.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Orders owned by one customer.
    ByCustomer(UserId),
}

/// Everything a payment gateway retry is built from.
///
/// Produced by a pure read; preparing a repayment never changes the order.
#[derive(Debug, Clone, Serialize)]
pub struct RepaymentIntent {
    pub order: OrderId,
    pub items: Vec<LineItem>,
    pub total: u64,
    pub discount: u64,
    pub shipping: ShippingSnapshot,
}
