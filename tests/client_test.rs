use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use warehouse_dashboard::client::ApiClient;
use warehouse_dashboard::dashboard::DashboardState;
use warehouse_dashboard::errors::DashboardError;
use warehouse_dashboard::models::{ForkliftStatus, NewForklift, OrderStatus};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

fn forklift_json(status: &str) -> serde_json::Value {
    json!([{ "id": 1, "name": "FL-1", "status": status, "location_id": 1 }])
}

/// Mounts the four non-forklift endpoints a snapshot refresh hits.
async fn mount_reference_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/warehouse/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Depot", "mapId": 1, "displayX": 0, "displayY": 0 },
            { "id": 2, "name": "Dock A", "mapId": 1, "displayX": 4, "displayY": 0 }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/warehouse/maps"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Main floor" }])),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 5, "pickup_location_id": 2, "delivery_location_id": 1, "status": "pending" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plans/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "forklift_id": 1, "order_id": 5,
              "start_time": "2024-06-01T08:00:00", "end_time": "2024-06-01T08:00:20" }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_forklifts_passes_the_status_filter_and_decodes_wire_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forklifts/"))
        .and(query_param("status", "not available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forklift_json("not available")))
        .expect(1)
        .mount(&server)
        .await;

    let forklifts = client(&server)
        .list_forklifts(Some(ForkliftStatus::NotAvailable))
        .await
        .unwrap();
    assert_eq!(forklifts.len(), 1);
    assert_eq!(forklifts[0].status, ForkliftStatus::NotAvailable);
}

#[tokio::test]
async fn block_then_unblock_returns_the_forklift_to_its_pre_block_status() {
    let server = MockServer::start().await;
    mount_reference_data(&server).await;

    // The backend reports "available" before the block, "blocked" after it,
    // and "available" again once unblocked.
    for status in ["available", "blocked", "available"] {
        Mock::given(method("GET"))
            .and(path("/forklifts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forklift_json(status)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/forklifts/1/block"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/forklifts/1/unblock"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = DashboardState::new(client(&server));
    state.refresh().await.unwrap();
    let before = state.snapshot.forklifts[0].status;
    assert_eq!(before, ForkliftStatus::Available);

    state.block_forklift(1).await.unwrap();
    assert_eq!(state.snapshot.forklifts[0].status, ForkliftStatus::Blocked);

    state.unblock_forklift(1).await.unwrap();
    assert_eq!(state.snapshot.forklifts[0].status, before);
}

#[tokio::test]
async fn forklift_status_update_patches_a_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/forklifts/1/status"))
        .and(body_json(json!({ "status": "not available" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_forklift_status(1, ForkliftStatus::NotAvailable)
        .await
        .unwrap();
}

#[tokio::test]
async fn order_status_update_goes_through_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5/status"))
        .and(query_param("status", "on the way"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_order_status(5, OrderStatus::OnTheWay)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_forklift_rejects_an_empty_name_without_calling_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forklifts/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(&server)
        .create_forklift(&NewForklift::new("", 0, 0))
        .await;
    assert_matches!(result, Err(DashboardError::Validation(_)));
}

#[tokio::test]
async fn create_forklift_posts_the_form_and_returns_the_created_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forklifts/"))
        .and(body_json(
            json!({ "name": "FL-9", "status": "available", "x": 2, "y": 3 }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "id": 9, "name": "FL-9", "status": "available", "location_id": null }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_forklift(&NewForklift::new("FL-9", 2, 3))
        .await
        .unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn non_2xx_responses_map_to_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client(&server).list_orders().await;
    assert_matches!(result, Err(DashboardError::Api { status: 500, .. }));
}

#[tokio::test]
async fn refresh_is_fail_fast_when_any_fetch_fails() {
    let server = MockServer::start().await;
    mount_reference_data(&server).await;
    // No /forklifts/ mock: that leg 404s and the whole refresh fails.

    let mut state = DashboardState::new(client(&server));
    let result = state.refresh().await;
    assert_matches!(result, Err(DashboardError::Api { status: 404, .. }));
    assert!(state.snapshot.forklifts.is_empty());
}

#[tokio::test]
async fn reset_all_hits_both_reset_endpoints_then_refetches() {
    let server = MockServer::start().await;
    mount_reference_data(&server).await;
    Mock::given(method("GET"))
        .and(path("/forklifts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forklift_json("available")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/forklifts/reset-status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/orders/reset-status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = DashboardState::new(client(&server));
    state.reset_all().await.unwrap();
    assert_eq!(state.snapshot.orders.len(), 1);
}

#[tokio::test]
async fn status_sync_patches_only_changed_orders_and_only_once() {
    use std::collections::HashMap;
    use warehouse_dashboard::dashboard::OrderStatusSync;
    use warehouse_dashboard::models::Order;

    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5/status"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let orders = vec![Order {
        id: 5,
        pickup_location_id: 2,
        delivery_location_id: 1,
        status: OrderStatus::Pending,
    }];
    let mut derived = HashMap::new();
    derived.insert(5, OrderStatus::Completed);

    let api = client(&server);
    let mut sync = OrderStatusSync::new(true);
    assert_eq!(sync.push(&api, &orders, &derived).await.unwrap(), 1);
    // Unchanged derived status generates no further traffic.
    assert_eq!(sync.push(&api, &orders, &derived).await.unwrap(), 0);
}

#[tokio::test]
async fn disabled_status_sync_never_touches_the_backend() {
    use std::collections::HashMap;
    use warehouse_dashboard::dashboard::OrderStatusSync;
    use warehouse_dashboard::models::Order;

    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let orders = vec![Order {
        id: 5,
        pickup_location_id: 2,
        delivery_location_id: 1,
        status: OrderStatus::Pending,
    }];
    let mut derived = HashMap::new();
    derived.insert(5, OrderStatus::Completed);

    let mut sync = OrderStatusSync::new(false);
    assert_eq!(
        sync.push(&client(&server), &orders, &derived).await.unwrap(),
        0
    );
}
