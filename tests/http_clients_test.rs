//! HTTP client tests
//!
//! Runs the catalog, region directory and submission clients against a local
//! stub server: decoding, retry of transient failures, request timeouts and
//! the exact body of `POST /points`.
mod utils;

use ecoleta_lib::modules::catalog::{HttpItemCatalogClient, ItemCatalogClient};
use ecoleta_lib::modules::location::{Coordinate, FixedGeolocation};
use ecoleta_lib::modules::point_form::CollectionPointForm;
use ecoleta_lib::modules::region::{IbgeRegionDirectoryClient, RegionDirectoryClient};
use ecoleta_lib::modules::submission::{
    ContactField, ContactInfo, HttpSubmissionClient, SubmissionClient, SubmissionRecord,
};
use ecoleta_lib::shared::config::AppConfig;
use ecoleta_lib::shared::errors::AppError;
use ecoleta_lib::shared::infrastructure::{HttpHandler, RetryConfig};
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use utils::fakes::{city, code};
use utils::stub_server::{CannedResponse, StubServer};

fn handler(retries: u32) -> HttpHandler {
    HttpHandler::new("Stub", Duration::from_secs(5), RetryConfig::immediate(retries)).unwrap()
}

const SHORT_TIMEOUT: Duration = Duration::from_millis(200);
const SLOW_RESPONSE: Duration = Duration::from_secs(2);

fn config_for(server: &StubServer) -> AppConfig {
    AppConfig {
        api_url: server.url().to_string(),
        regions_api_url: server.url().to_string(),
        http_timeout: Duration::from_secs(5),
        http_retries: 1,
        geolocation_timeout: Duration::from_millis(100),
        device_position: Some((-8.05, -34.9)),
    }
}

// ================================================================================================
// ITEM CATALOG
// ================================================================================================

#[tokio::test]
async fn catalog_skips_malformed_entries() {
    let server = StubServer::start().await;
    server.route(
        "GET /items",
        vec![CannedResponse::json(
            200,
            json!([
                { "id": 1, "title": "Lâmpadas", "image_url": "http://localhost:3333/uploads/lampadas.svg" },
                { "id": "two", "title": "Pilhas e Baterias" },
                { "id": 3, "title": "Papéis e Papelão", "image_url": "http://localhost:3333/uploads/papeis.svg" }
            ]),
        )],
    );

    let client = HttpItemCatalogClient::with_handler(server.url(), handler(0));
    let items = client.list_items().await.unwrap();

    assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(items[0].title, "Lâmpadas");
}

#[tokio::test]
async fn transient_failure_is_retried() {
    let server = StubServer::start().await;
    server.route(
        "GET /items",
        vec![
            CannedResponse::text(503, "unavailable"),
            CannedResponse::json(200, json!([{ "id": 1, "title": "Óleo", "image_url": "" }])),
        ],
    );

    let client = HttpItemCatalogClient::with_handler(server.url(), handler(1));
    let items = client.list_items().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(server.requests_to("GET", "/items").len(), 2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = StubServer::start().await;
    server.route("GET /items", vec![CannedResponse::text(404, "missing")]);

    let client = HttpItemCatalogClient::with_handler(server.url(), handler(3));
    let result = client.list_items().await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamError { status: 404, .. })
    ));
    assert_eq!(server.requests_to("GET", "/items").len(), 1);
}

#[tokio::test]
async fn slow_read_times_out_and_is_retried_once() {
    let server = StubServer::start().await;
    server.route(
        "GET /items",
        vec![CannedResponse::json(200, json!([])).after(SLOW_RESPONSE)],
    );

    let http = HttpHandler::new("Stub", SHORT_TIMEOUT, RetryConfig::immediate(1)).unwrap();
    let client = HttpItemCatalogClient::with_handler(server.url(), http);

    assert!(matches!(
        client.list_items().await,
        Err(AppError::NetworkUnavailable(_))
    ));
    assert_eq!(server.requests_to("GET", "/items").len(), 2);
}

#[tokio::test]
async fn non_array_body_is_invalid() {
    let server = StubServer::start().await;
    server.route(
        "GET /items",
        vec![CannedResponse::json(200, json!({ "items": [] }))],
    );

    let client = HttpItemCatalogClient::with_handler(server.url(), handler(0));
    assert!(matches!(
        client.list_items().await,
        Err(AppError::InvalidResponse(_))
    ));
}

// ================================================================================================
// REGION DIRECTORY
// ================================================================================================

#[tokio::test]
async fn states_are_sorted_codes() {
    let server = StubServer::start().await;
    server.route(
        "GET /estados",
        vec![CannedResponse::json(
            200,
            json!([
                { "id": 35, "sigla": "SP", "nome": "São Paulo" },
                { "id": 26, "sigla": "PE", "nome": "Pernambuco" },
                { "id": 12, "sigla": "AC", "nome": "Acre" }
            ]),
        )],
    );

    let client = IbgeRegionDirectoryClient::with_handler(server.url(), handler(0));
    let regions = client.list_regions().await.unwrap();

    assert_eq!(regions, vec![code("AC"), code("PE"), code("SP")]);
}

#[tokio::test]
async fn municipalities_are_fetched_for_the_state() {
    let server = StubServer::start().await;
    server.route(
        "GET /estados/PE/municipios",
        vec![CannedResponse::json(
            200,
            json!([
                { "id": 2611606, "nome": "Recife" },
                { "id": 2609600, "nome": "Olinda" }
            ]),
        )],
    );

    let client = IbgeRegionDirectoryClient::with_handler(server.url(), handler(0));
    let municipalities = client.list_municipalities(&code("PE")).await.unwrap();

    assert_eq!(municipalities, vec![city("Recife"), city("Olinda")]);
}

// ================================================================================================
// SUBMISSION
// ================================================================================================

fn record() -> SubmissionRecord {
    SubmissionRecord {
        contact: ContactInfo {
            name: "Foo".into(),
            email: "f@x.com".into(),
            whatsapp: "123".into(),
        },
        region: code("PE"),
        municipality: city("Recife"),
        coordinate: Coordinate::new(-8.05, -34.9).unwrap(),
        items: BTreeSet::from([1, 3]),
    }
}

#[tokio::test]
async fn create_point_posts_the_wire_body() {
    let server = StubServer::start().await;
    server.route(
        "POST /points",
        vec![CannedResponse::json(200, json!({ "id": 42 }))],
    );

    let client = HttpSubmissionClient::with_handler(server.url(), handler(0));
    let receipt = client.create_point(&record()).await.unwrap();
    assert_eq!(receipt.point_id, Some(42));

    let posted = server.requests_to("POST", "/points");
    assert_eq!(posted.len(), 1);
    assert_eq!(
        posted[0].json_body(),
        json!({
            "name": "Foo",
            "email": "f@x.com",
            "whatsapp": "123",
            "uf": "PE",
            "city": "Recife",
            "latitude": -8.05,
            "longitude": -34.9,
            "items": [1, 3]
        })
    );
}

#[tokio::test]
async fn create_point_accepts_empty_body() {
    let server = StubServer::start().await;
    server.route("POST /points", vec![CannedResponse::text(200, "")]);

    let client = HttpSubmissionClient::with_handler(server.url(), handler(0));
    let receipt = client.create_point(&record()).await.unwrap();
    assert_eq!(receipt.point_id, None);
}

#[tokio::test]
async fn create_point_is_sent_once_on_server_error() {
    let server = StubServer::start().await;
    server.route(
        "POST /points",
        vec![CannedResponse::text(503, "unavailable")],
    );

    let client = HttpSubmissionClient::new(&config_for(&server)).unwrap();
    let result = client.create_point(&record()).await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamError { status: 503, .. })
    ));
    assert_eq!(server.requests_to("POST", "/points").len(), 1);
}

#[tokio::test]
async fn create_point_is_sent_once_on_timeout() {
    let server = StubServer::start().await;
    server.route(
        "POST /points",
        vec![CannedResponse::json(201, json!({ "id": 9 })).after(SLOW_RESPONSE)],
    );

    let config = AppConfig {
        http_timeout: SHORT_TIMEOUT,
        http_retries: 3,
        ..config_for(&server)
    };
    let client = HttpSubmissionClient::new(&config).unwrap();

    assert!(matches!(
        client.create_point(&record()).await,
        Err(AppError::NetworkUnavailable(_))
    ));
    assert_eq!(server.requests_to("POST", "/points").len(), 1);
}

// ================================================================================================
// END TO END
// ================================================================================================

#[tokio::test]
async fn form_registers_point_through_http() {
    let server = StubServer::start().await;
    server
        .route(
            "GET /items",
            vec![CannedResponse::json(
                200,
                json!([
                    { "id": 1, "title": "Lâmpadas", "image_url": "" },
                    { "id": 2, "title": "Pilhas e Baterias", "image_url": "" }
                ]),
            )],
        )
        .route(
            "GET /estados",
            vec![CannedResponse::json(200, json!([{ "sigla": "PE" }]))],
        )
        .route(
            "GET /estados/PE/municipios",
            vec![CannedResponse::json(200, json!([{ "nome": "Recife" }]))],
        )
        .route(
            "POST /points",
            vec![CannedResponse::json(201, json!({ "id": 7 }))],
        );

    let config = config_for(&server);
    let geolocation = Arc::new(FixedGeolocation::from_config(&config).unwrap());
    let form = CollectionPointForm::from_config(&config, geolocation).unwrap();

    let snapshot = form.initialize().await;
    assert_eq!(snapshot.items.catalog().len(), 2);
    assert_eq!(snapshot.regions.regions(), &[code("PE")]);

    form.update_contact_field(ContactField::Name, "Foo".into())
        .await
        .unwrap();
    form.select_region(Some(code("PE"))).await.unwrap();
    form.select_municipality(Some(city("Recife"))).await.unwrap();
    form.toggle_item(2).await.unwrap();

    let outcome = form.submit().await.unwrap();
    assert_eq!(outcome.receipt.point_id, Some(7));

    let posted = server.requests_to("POST", "/points");
    assert_eq!(posted.len(), 1);
    let body = posted[0].json_body();
    assert_eq!(body["uf"], "PE");
    assert_eq!(body["city"], "Recife");
    assert_eq!(body["latitude"], -8.05);
    assert_eq!(body["longitude"], -34.9);
    assert_eq!(body["items"], json!([2]));
}
