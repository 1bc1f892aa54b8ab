//! End-to-end tests for [`HttpRouteProvider`] against a local stub server.

mod support;

use std::time::Duration;

use fuelroute_core::{Coordinate, RouteError, RouteProvider, RouteRequest};
use fuelroute_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
use rstest::{fixture, rstest};
use support::{Reply, StubServer, reference_body, unreachable_base_url};

#[fixture]
fn request() -> RouteRequest {
    RouteRequest::new(
        Coordinate::new(-17.964055, -67.114579).expect("valid origin"),
        Coordinate::new(-18.0, -67.2).expect("valid destination"),
    )
}

#[rstest]
#[tokio::test]
async fn fetches_and_transposes_route(request: RouteRequest) {
    let server = StubServer::start(Reply::ok(reference_body())).await;
    let provider = HttpRouteProvider::new(server.base_url()).expect("provider should build");

    let route = provider.route(&request).await.expect("route");

    assert_eq!(route.lat_lng_pairs(), vec![[-17.9, -67.1], [-18.0, -67.2]]);
    assert_eq!(route.steps.len(), 2);
    assert_eq!(route.duration_secs, 900.0);
    assert_eq!(route.distance_m, 15_000.0);
    assert_eq!(
        server.requests(),
        vec![
            "GET /route/v1/driving/-67.114579,-17.964055;-67.2,-18\
             ?overview=full&geometries=geojson&steps=true HTTP/1.1"
                .to_owned()
        ]
    );
}

#[rstest]
#[case(500)]
#[case(400)]
#[tokio::test]
async fn non_success_status_is_an_http_error(request: RouteRequest, #[case] status: u16) {
    let server = StubServer::start(Reply::status(status, r#"{"code":"Error"}"#)).await;
    let provider = HttpRouteProvider::new(server.base_url()).expect("provider should build");

    let err = provider.route(&request).await.expect_err("should fail");

    match err {
        RouteError::HttpError {
            status: got, url, ..
        } => {
            assert_eq!(got, status);
            assert!(url.starts_with(server.base_url()));
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn undecodable_body_is_a_parse_error(request: RouteRequest) {
    let server = StubServer::start(Reply::ok("<html>not json</html>")).await;
    let provider = HttpRouteProvider::new(server.base_url()).expect("provider should build");

    let err = provider.route(&request).await.expect_err("should fail");

    assert!(matches!(err, RouteError::ParseError { .. }), "got {err:?}");
}

#[rstest]
#[tokio::test]
async fn refused_connection_is_a_network_error(request: RouteRequest) {
    let provider =
        HttpRouteProvider::new(unreachable_base_url().await).expect("provider should build");

    let err = provider.route(&request).await.expect_err("should fail");

    assert!(matches!(err, RouteError::NetworkError { .. }), "got {err:?}");
}

#[rstest]
#[tokio::test]
async fn slow_service_is_a_timeout(request: RouteRequest) {
    let server = StubServer::start(Reply::Silent).await;
    let config =
        HttpRouteProviderConfig::new(server.base_url()).with_timeout(Duration::from_millis(200));
    let provider = HttpRouteProvider::with_config(config).expect("provider should build");

    let err = provider.route(&request).await.expect_err("should fail");

    assert!(matches!(err, RouteError::Timeout { .. }), "got {err:?}");
}

#[rstest]
#[tokio::test]
async fn service_error_code_is_reported(request: RouteRequest) {
    let body = r#"{"code":"NoSegment","message":"Could not find a matching segment"}"#;
    let server = StubServer::start(Reply::ok(body)).await;
    let provider = HttpRouteProvider::new(server.base_url()).expect("provider should build");

    let err = provider.route(&request).await.expect_err("should fail");

    assert_eq!(
        err,
        RouteError::ServiceError {
            code: "NoSegment".to_owned(),
            message: "Could not find a matching segment".to_owned(),
        }
    );
}
