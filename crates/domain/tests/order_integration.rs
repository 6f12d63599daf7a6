//! Integration tests for the order service.
//!
//! These tests drive the full order lifecycle through the service and check
//! that rejected operations never touch the store.

use std::sync::Arc;

use common::{EntityId, SequentialIdGenerator};
use domain::{DomainError, Order, OrderLine, OrderService, OrderStatus, Payload};
use entity_store::EntityStore;
use serde_json::{Value, json};

/// Helper to create a test order service
fn create_service() -> OrderService<SequentialIdGenerator> {
    OrderService::new(
        entity_store::shared(EntityStore::new()),
        Arc::new(SequentialIdGenerator::new("order")),
    )
}

fn order_payload() -> Value {
    json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-1234",
        "dishes": [{ "dishId": "d1", "quantity": 2 }]
    })
}

fn with_status(status: &str) -> Payload {
    let mut payload = order_payload();
    payload["status"] = json!(status);
    Payload::from(payload)
}

async fn create_order(service: &OrderService<SequentialIdGenerator>) -> Order {
    service
        .create(&Payload::from(order_payload()))
        .await
        .unwrap()
}

async fn order_count(service: &OrderService<SequentialIdGenerator>) -> usize {
    service.store().read().await.len()
}

mod order_lifecycle {
    use super::*;

    #[tokio::test]
    async fn create_update_then_delete_is_refused() {
        let service = create_service();

        // Create order
        let order = create_order(&service).await;
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.deliver_to(), "123 Main");
        assert_eq!(order.dishes(), &[OrderLine::new("d1", 2)]);

        // Mark delivered
        let updated = service
            .update(order.id(), &with_status("delivered"))
            .await
            .unwrap();
        assert_eq!(updated.status(), OrderStatus::Delivered);

        // Delivered orders cannot be deleted
        let err = service.delete(order.id()).await.unwrap_err();
        assert_eq!(err, DomainError::NotPending);
        assert_eq!(order_count(&service).await, 1);
    }

    #[tokio::test]
    async fn walks_through_every_status() {
        let service = create_service();
        let order = create_order(&service).await;

        for status in ["preparing", "out-for-delivery", "delivered"] {
            let updated = service
                .update(order.id(), &with_status(status))
                .await
                .unwrap();
            assert_eq!(updated.status().as_str(), status);
        }

        let stored = service.get(order.id()).await.unwrap();
        assert!(stored.status().is_terminal());
    }

    #[tokio::test]
    async fn pending_order_can_be_deleted() {
        let service = create_service();
        let order = create_order(&service).await;

        service.delete(order.id()).await.unwrap();

        assert_eq!(order_count(&service).await, 0);
        let err = service.get(order.id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_is_refused_outside_pending() {
        for status in ["preparing", "out-for-delivery", "delivered"] {
            let service = create_service();
            let order = create_order(&service).await;
            service
                .update(order.id(), &with_status(status))
                .await
                .unwrap();

            let err = service.delete(order.id()).await.unwrap_err();
            assert_eq!(err, DomainError::NotPending);
            assert_eq!(order_count(&service).await, 1);
        }
    }

    #[tokio::test]
    async fn delivered_order_rejects_every_update() {
        let service = create_service();
        let order = create_order(&service).await;
        service
            .update(order.id(), &with_status("delivered"))
            .await
            .unwrap();

        let payloads = [
            with_status("pending"),
            with_status("invalid"),
            Payload::default(),
            Payload::from(json!({ "dishes": [] })),
        ];
        for payload in payloads {
            let err = service.update(order.id(), &payload).await.unwrap_err();
            assert_eq!(err, DomainError::Terminal);
        }

        let stored = service.get(order.id()).await.unwrap();
        assert_eq!(stored.status(), OrderStatus::Delivered);
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn assigns_fresh_id_ignoring_supplied_one() {
        let service = create_service();
        let mut payload = order_payload();
        payload["id"] = json!("client-chosen");

        let order = service.create(&Payload::from(payload)).await.unwrap();
        assert_eq!(order.id(), "order-1");

        let read = service.get(order.id()).await.unwrap();
        assert_eq!(read, order);
    }

    #[tokio::test]
    async fn invalid_payloads_leave_store_empty() {
        let service = create_service();

        let bad_payloads = [
            json!({ "mobileNumber": "555", "dishes": [{ "quantity": 1 }] }),
            json!({ "deliverTo": "1 Road", "dishes": [{ "quantity": 1 }] }),
            json!({ "deliverTo": "1 Road", "mobileNumber": "555", "dishes": [] }),
            json!({ "deliverTo": "1 Road", "mobileNumber": "555", "dishes": [{ "quantity": 0 }] }),
            json!({ "deliverTo": "1 Road", "mobileNumber": "555", "dishes": [{ "quantity": "2" }] }),
            json!({ "deliverTo": "1 Road", "mobileNumber": "555", "dishes": [{ "quantity": -1 }] }),
        ];

        for payload in bad_payloads {
            let err = service.create(&Payload::from(payload)).await.unwrap_err();
            assert_eq!(err.kind(), "InvalidField");
        }
        assert_eq!(order_count(&service).await, 0);
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let service = create_service();
        let first = create_order(&service).await;
        let second = create_order(&service).await;
        let third = create_order(&service).await;

        let ids: Vec<EntityId> = service
            .list()
            .await
            .iter()
            .map(|o| o.id().clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                first.id().clone(),
                second.id().clone(),
                third.id().clone()
            ]
        );
    }

    #[tokio::test]
    async fn list_by_status_filters() {
        let service = create_service();
        let first = create_order(&service).await;
        create_order(&service).await;
        service
            .update(first.id(), &with_status("preparing"))
            .await
            .unwrap();

        assert_eq!(service.list_by_status(OrderStatus::Pending).await.len(), 1);
        let preparing = service.list_by_status(OrderStatus::Preparing).await;
        assert_eq!(preparing.len(), 1);
        assert_eq!(preparing[0].id(), first.id());
    }
}

mod updates {
    use super::*;

    #[tokio::test]
    async fn replaces_dishes_wholesale() {
        let service = create_service();
        let order = create_order(&service).await;

        let payload = Payload::from(json!({
            "deliverTo": "9 Elm",
            "mobileNumber": "555-0000",
            "status": "preparing",
            "dishes": [
                { "dishId": "d7", "quantity": 1 },
                { "dishId": "d8", "quantity": 3 }
            ]
        }));
        let updated = service.update(order.id(), &payload).await.unwrap();

        assert_eq!(updated.id(), order.id());
        assert_eq!(updated.deliver_to(), "9 Elm");
        assert_eq!(
            updated.dishes(),
            &[OrderLine::new("d7", 1), OrderLine::new("d8", 3)]
        );
        assert_eq!(service.get(order.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn rejected_update_keeps_stored_order() {
        let service = create_service();
        let order = create_order(&service).await;

        let mut payload = order_payload();
        payload["status"] = json!("preparing");
        payload["dishes"] = json!([{ "dishId": "d1", "quantity": 5 }, { "quantity": 0 }]);

        let err = service
            .update(order.id(), &Payload::from(payload))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
        assert_eq!(service.get(order.id()).await.unwrap(), order);
    }

    #[tokio::test]
    async fn mismatched_id_is_rejected() {
        let service = create_service();
        let order = create_order(&service).await;

        let mut payload = order_payload();
        payload["id"] = json!("someone-else");
        payload["status"] = json!("preparing");

        let err = service
            .update(order.id(), &Payload::from(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::IdMismatch { .. }));
        assert_eq!(
            service.get(order.id()).await.unwrap().status(),
            OrderStatus::Pending
        );
    }

    #[tokio::test]
    async fn update_of_unknown_order_is_not_found() {
        let service = create_service();
        let err = service
            .update(&EntityId::from("missing"), &with_status("pending"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Order not found: missing");
    }

    #[tokio::test]
    async fn missing_or_sentinel_status_is_rejected() {
        let service = create_service();
        let order = create_order(&service).await;

        let err = service
            .update(order.id(), &Payload::from(order_payload()))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidStatus);

        let err = service
            .update(order.id(), &with_status("invalid"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidStatus);
    }
}

mod concurrency {
    use super::*;

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let service = Arc::new(create_service());

        let mut handles = Vec::new();
        for _ in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create(&Payload::from(order_payload()))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id().clone());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(order_count(&service).await, 20);
    }

    #[tokio::test]
    async fn only_one_concurrent_delete_succeeds() {
        let service = Arc::new(create_service());
        let order = create_order(&service).await;

        let mut handles = Vec::new();
        for _ in 0..5 {
            let service = service.clone();
            let id = order.id().clone();
            handles.push(tokio::spawn(async move { service.delete(&id).await }));
        }

        let mut deleted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                deleted += 1;
            }
        }
        assert_eq!(deleted, 1);
        assert_eq!(order_count(&service).await, 0);
    }
}
