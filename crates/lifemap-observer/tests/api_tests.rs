//! Integration tests for the view API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use lifemap_core::MapView;
use lifemap_observer::router::build_router;
use lifemap_observer::state::AppState;
use lifemap_types::{
    GeoPoint, GroupRef, LatLng, LifeEvent, MapCamera, MarkerAnimation, PixelOffset, RefreshId,
};
use serde_json::Value;
use tower::ServiceExt;

fn sample_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent::new("doc-1", GeoPoint::numeric(35.0, 139.0), "Moved in", "2019-04-01")
            .with_explanation("first flat\nthird floor"),
        LifeEvent::new("doc-2", GeoPoint::numeric(35.0, 139.0), "New job", "2021-10-01"),
        LifeEvent::new("doc-3", GeoPoint::numeric(34.0, 138.0), "Road trip", "2022-08-11"),
    ]
}

async fn make_test_state() -> Arc<AppState> {
    let view = MapView::new(
        MarkerAnimation::Drop,
        PixelOffset::ABOVE_MARKER,
        MapCamera::new(LatLng::new(35.6812, 139.7671), 10),
    );
    let state = Arc::new(AppState::new(view));
    state.apply_delivery(&sample_events(), Utc::now(), 0).await;
    state
}

async fn current_refresh(state: &Arc<AppState>) -> RefreshId {
    state.view.read().await.map.refresh()
}

fn json_request(method: &str, path: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_get_markers_one_per_group() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/markers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["markers"][0]["position"]["lat"], 35.0);
    assert_eq!(json["markers"][0]["animation"], "drop");
    assert_eq!(json["markers"][1]["group"]["index"], 1);
}

#[tokio::test]
async fn test_overlay_is_null_before_any_selection() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json.is_null());
}

#[tokio::test]
async fn test_select_opens_the_group_overlay() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/selection",
            &GroupRef::new(refresh, 0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;

    // Both events at 35,139, in original order, one divider between them.
    assert_eq!(json["anchor"]["lat"], 35.0);
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["entries"][0]["heading"], "Moved in");
    assert_eq!(json["entries"][0]["explanation"], "first flat\nthird floor");
    assert_eq!(json["entries"][0]["divider"], true);
    assert_eq!(json["entries"][1]["divider"], false);
    assert_eq!(json["dismiss"]["label"], "\u{00d7}");
    assert_eq!(json["offset"]["y"], -45);
}

#[tokio::test]
async fn test_reselecting_the_open_marker_keeps_it_open() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;
    let router = build_router(state);

    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/selection",
                &GroupRef::new(refresh, 0),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_selecting_another_marker_replaces_the_overlay() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;
    let router = build_router(state);

    for index in [0_usize, 1] {
        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/selection",
                &GroupRef::new(refresh, index),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    // Only the second group's card is open.
    assert_eq!(json["anchor"]["lat"], 34.0);
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_select_unknown_index_returns_404() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;
    let router = build_router(state);

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/selection",
            &GroupRef::new(refresh, 17),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_select_with_stale_refresh_returns_409() {
    let state = make_test_state().await;
    let stale = GroupRef::new(current_refresh(&state).await, 0);

    // A new delivery replaces the groups and invalidates old references.
    state.apply_delivery(&sample_events(), Utc::now(), 0).await;
    let router = build_router(state);

    let response = router
        .oneshot(json_request("PUT", "/api/selection", &stale))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delivery_force_closes_the_open_overlay() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;

    let router = build_router(state.clone());
    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/selection",
            &GroupRef::new(refresh, 0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    state.apply_delivery(&sample_events(), Utc::now(), 0).await;

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert!(json.is_null());
}

#[tokio::test]
async fn test_dismiss_is_idempotent() {
    let state = make_test_state().await;
    let refresh = current_refresh(&state).await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/selection",
            &GroupRef::new(refresh, 0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(
                Request::delete("/api/selection")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .oneshot(Request::get("/api/overlay").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(body_to_json(response.into_body()).await.is_null());
}

#[tokio::test]
async fn test_get_view_combines_markers_overlay_and_camera() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/view").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["markers"].as_array().map(Vec::len), Some(2));
    assert!(json["overlay"].is_null());
    assert_eq!(json["camera"]["zoom"], 10);
    assert!(json["refresh"].is_string());
}

#[tokio::test]
async fn test_camera_recenter_snaps_to_place_zoom() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/camera",
            &LatLng::new(34.7, 135.5),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["camera"]["center"]["lat"], 34.7);
    assert_eq!(json["camera"]["zoom"], 15);

    let response = router
        .oneshot(Request::get("/api/view").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["camera"]["zoom"], 15);
}
