//! Full end-to-end integration tests with all real actors.
//!
//! Exercises the whole system through [`StorefrontSystem`]: a complete
//! order-and-review flow, then the concurrency properties the sequential
//! mailboxes guarantee.

use storefront::lifecycle::StorefrontSystem;
use storefront::model::{
    Caller, FulfillmentStatus, LineItem, OrderCreate, PaymentMethod, PaymentStatus, RatingCreate,
    ShippingSnapshot, StatusPatch,
};
use storefront::order_actor::OrderError;

fn checkout(customer: &str) -> OrderCreate {
    OrderCreate {
        customer: customer.to_string(),
        code: None,
        items: vec![LineItem {
            product: "p-margherita".to_string(),
            name: "Margherita".to_string(),
            unit_price: 125_000,
            quantity: 2,
            image: Some("/img/margherita.jpg".to_string()),
        }],
        shipping: ShippingSnapshot {
            recipient: "Alice Nguyen".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Elm St".to_string(),
        },
        discount: 0,
        payment_method: PaymentMethod::OnlineGateway,
    }
}

/// A customer orders, pays, receives the pizza, and reviews it; staff
/// drive fulfillment and answer the review.
#[tokio::test]
async fn test_full_storefront_flow() {
    let system = StorefrontSystem::new();
    let alice = Caller::customer("alice");
    let staff = Caller::admin("staff");

    // Checkout.
    let order_id = system
        .order_client
        .place(checkout("alice"))
        .await
        .expect("Failed to place order");
    let order = system
        .order_client
        .detail(order_id.clone(), &alice)
        .await
        .expect("Failed to read own order");
    assert_eq!(order.total, 250_000);
    assert_eq!(order.fulfillment, FulfillmentStatus::PendingConfirmation);
    assert_eq!(order.payment, PaymentStatus::Unpaid);

    // The gateway reports a failure; the customer retries from the intent.
    system
        .order_client
        .apply_status(
            order_id.clone(),
            StatusPatch {
                fulfillment: None,
                payment: Some(PaymentStatus::Failed),
            },
        )
        .await
        .expect("Failed to record failed charge");
    let intent = system
        .order_client
        .request_repayment(order_id.clone(), &alice)
        .await
        .expect("Failed order should offer repayment");
    assert_eq!(intent.total, 250_000);
    assert_eq!(intent.items.len(), 1);

    // Retry succeeds; fulfillment runs to completion.
    system
        .order_client
        .apply_status(
            order_id.clone(),
            StatusPatch {
                fulfillment: Some(FulfillmentStatus::Shipping),
                payment: Some(PaymentStatus::Succeeded),
            },
        )
        .await
        .expect("Failed to confirm payment and ship");
    for next in [FulfillmentStatus::Delivered, FulfillmentStatus::Completed] {
        system
            .order_client
            .apply_status(
                order_id.clone(),
                StatusPatch {
                    fulfillment: Some(next),
                    payment: None,
                },
            )
            .await
            .expect("Legal transition refused");
    }

    // Review the pizza; staff reply.
    let rating_id = system
        .rating_client
        .submit(
            RatingCreate {
                product: "p-margherita".to_string(),
                author: "alice".to_string(),
                score: 5,
                comment: Some("still hot on arrival".to_string()),
            },
            &alice,
        )
        .await
        .expect("Failed to submit rating");
    system
        .rating_client
        .admin_reply(rating_id, "thank you!".to_string(), &staff)
        .await
        .expect("Failed to reply");

    let summary = system
        .rating_client
        .summary("p-margherita".to_string())
        .await
        .unwrap();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.average, Some(5.0));

    let listed = system
        .rating_client
        .list_for_product("p-margherita".to_string())
        .await
        .unwrap();
    assert_eq!(
        listed[0].reply.as_ref().map(|r| r.text.as_str()),
        Some("thank you!")
    );

    // History shows the one completed order.
    let history = system.order_client.list_for(&alice).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].fulfillment, FulfillmentStatus::Completed);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Racing cancels on one order: the mailbox serializes them, so exactly
/// one wins and the rest fail the precondition.
#[tokio::test]
async fn test_concurrent_cancels_resolve_exactly_once() {
    let system = StorefrontSystem::new();
    let alice = Caller::customer("alice");

    let order_id = system.order_client.place(checkout("alice")).await.unwrap();

    let mut handles = vec![];
    for _ in 0..8 {
        let client = system.order_client.clone();
        let id = order_id.clone();
        let caller = alice.clone();
        handles.push(tokio::spawn(
            async move { client.cancel(id, &caller).await },
        ));
    }

    let mut succeeded = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(order) => {
                assert_eq!(order.fulfillment, FulfillmentStatus::Cancelled);
                succeeded += 1;
            }
            Err(OrderError::InvalidState(_)) => refused += 1,
            Err(other) => panic!("unexpected cancel failure: {other}"),
        }
    }
    assert_eq!(succeeded, 1, "exactly one cancel may win");
    assert_eq!(refused, 7, "every loser must see InvalidState");

    let order = system
        .order_client
        .detail(order_id, &alice)
        .await
        .unwrap();
    assert_eq!(order.fulfillment, FulfillmentStatus::Cancelled);
    assert_eq!(order.payment, PaymentStatus::Unpaid);

    system.shutdown().await.unwrap();
}

/// Racing upserts of the same (author, product) key collapse to a single
/// record; racing submits from distinct authors all append.
#[tokio::test]
async fn test_concurrent_rating_writes() {
    let system = StorefrontSystem::new();

    // Same author, same product, eight racing upserts.
    let mut handles = vec![];
    for score in 1..=8u8 {
        let client = system.rating_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .upsert(
                    RatingCreate {
                        product: "p-1".to_string(),
                        author: "alice".to_string(),
                        score: score.min(5),
                        comment: None,
                    },
                    &Caller::customer("alice"),
                )
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Upsert should not fail");
    }

    let listed = system
        .rating_client
        .list_for_product("p-1".to_string())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1, "racing upserts must not duplicate");

    // Distinct authors appending concurrently.
    let mut handles = vec![];
    for i in 0..8 {
        let client = system.rating_client.clone();
        handles.push(tokio::spawn(async move {
            let author = format!("user-{i}");
            client
                .submit(
                    RatingCreate {
                        product: "p-2".to_string(),
                        author: author.clone(),
                        score: 4,
                        comment: None,
                    },
                    &Caller::customer(author),
                )
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Submit should not fail");
    }

    let listed = system
        .rating_client
        .list_for_product("p-2".to_string())
        .await
        .unwrap();
    assert_eq!(listed.len(), 8, "each author's submit must append");

    system.shutdown().await.unwrap();
}
