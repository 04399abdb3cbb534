//! End-to-end tests: router, service, in-memory store and the real HTTP
//! clients talking to mock pricing and maps servers.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vehicles_api::api::rest::{AppState, create_router};
use vehicles_api::application::services::{EnrichmentConfig, VehicleService};
use vehicles_api::infrastructure::clients::{MapsClient, PricingClient};
use vehicles_api::infrastructure::persistence::in_memory::InMemoryVehicleRepository;

struct TestApp {
    router: Router,
    pricing: MockServer,
    maps: MockServer,
}

impl TestApp {
    async fn start(timeout_ms: u64) -> Self {
        let pricing = MockServer::start().await;
        let maps = MockServer::start().await;

        let service = VehicleService::new(
            Arc::new(InMemoryVehicleRepository::new()),
            Arc::new(PricingClient::new(pricing.uri(), timeout_ms).unwrap()),
            Arc::new(MapsClient::new(maps.uri(), timeout_ms).unwrap()),
            EnrichmentConfig::with_timeout(timeout_ms),
        );
        let state = Arc::new(AppState {
            service: Arc::new(service),
        });

        Self {
            router: create_router(state, false),
            pricing,
            maps,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn create(&self, lat: f64, lon: f64) -> serde_json::Value {
        let body = serde_json::json!({
            "condition": "USED",
            "details": {
                "body": "sedan",
                "model": "Impala",
                "manufacturer": {"code": 101, "name": "Chevrolet"},
                "numberOfDoors": 4,
                "fuelType": "Gasoline",
                "mileage": 32280,
                "modelYear": 2018
            },
            "location": {"lat": lat, "lon": lon}
        });
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/vehicles")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn mount_springfield(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/maps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": "123 Main",
            "city": "Springfield",
            "state": "NY",
            "zip": "10001"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_returns_fully_enriched_vehicle() {
    let app = TestApp::start(2000).await;
    Mock::given(method("GET"))
        .and(path("/services/price"))
        .and(query_param("vehicleId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vehicleId": 1,
            "price": "1500.00",
            "currency": "USD"
        })))
        .expect(1)
        .mount(&app.pricing)
        .await;
    mount_springfield(&app.maps).await;

    let created = app.create(40.0, -74.0).await;
    assert_eq!(created["id"], 1);
    assert!(created.get("price").is_none());

    let response = app.get("/vehicles/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let vehicle = json_body(response).await;

    assert_eq!(vehicle["price"], "1500.00");
    assert_eq!(
        vehicle["location"],
        serde_json::json!({
            "lat": 40.0,
            "lon": -74.0,
            "address": "123 Main",
            "city": "Springfield",
            "state": "NY",
            "zip": "10001"
        })
    );
    assert_eq!(vehicle["details"]["manufacturer"]["name"], "Chevrolet");
    assert!(vehicle.get("createdAt").is_some());
}

#[tokio::test]
async fn pricing_error_reads_as_not_found() {
    let app = TestApp::start(2000).await;
    Mock::given(method("GET"))
        .and(path("/services/price"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.pricing)
        .await;
    mount_springfield(&app.maps).await;

    app.create(40.0, -74.0).await;

    let response = app.get("/vehicles/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = json_body(response).await;
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn slow_maps_reads_as_not_found() {
    let app = TestApp::start(100).await;
    Mock::given(method("GET"))
        .and(path("/services/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vehicleId": 1,
            "price": "1500.00"
        })))
        .mount(&app.pricing)
        .await;
    Mock::given(method("GET"))
        .and(path("/maps"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"address": "late"}))
                .set_delay(std::time::Duration::from_millis(1000)),
        )
        .mount(&app.maps)
        .await;

    app.create(40.0, -74.0).await;

    let response = app.get("/vehicles/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_never_calls_remote_services() {
    let app = TestApp::start(2000).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.pricing)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.maps)
        .await;

    app.create(40.0, -74.0).await;
    app.create(35.5, 139.7).await;

    let response = app.get("/vehicles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = json_body(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|v| v.get("price").is_none()));
}

#[tokio::test]
async fn malformed_id_never_reaches_remote_services() {
    let app = TestApp::start(2000).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.pricing)
        .await;

    let response = app.get("/vehicles/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
