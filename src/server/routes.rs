//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::area::boundary::boundary_polygon;
use crate::area::{self, CheckReport};
use crate::error::Error;
use crate::geo::GeoPoint;
use crate::geocode::GeocodeBackend;
use crate::render::{GeoJsonRenderer, MapRenderer};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/check", post(check_handler))
        .route("/api/boundary", get(boundary_handler))
        .route("/api/status", get(status_handler))
        .with_state(state)
}

/// Check request body
///
/// Either a free-text address (geocoded server-side) or an explicit
/// candidate coordinate.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Free-text address
    pub address: Option<String>,
    /// Candidate latitude
    pub lat: Option<f64>,
    /// Candidate longitude
    pub lng: Option<f64>,
}

/// Check response body
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Request-generation token; clients keep only the highest seq when
    /// checks overlap
    pub seq: u64,
    /// The eligibility report
    pub report: CheckReport,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: Option<StatusCode>,
}

impl ApiError {
    fn bad_request(message: &str, code: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
            status: Some(StatusCode::BAD_REQUEST),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status.unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (code, status) = match &err {
            Error::InvalidCoordinate(_) => ("INVALID_COORDINATE", StatusCode::BAD_REQUEST),
            Error::InvalidServiceConfig(_) => {
                ("INVALID_SERVICE_CONFIG", StatusCode::INTERNAL_SERVER_ERROR)
            }
            Error::AddressNotFound(_) => ("ADDRESS_NOT_FOUND", StatusCode::NOT_FOUND),
            Error::Geocoding(_) => ("GEOCODING_ERROR", StatusCode::BAD_GATEWAY),
            Error::Config(_) => ("CONFIG_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
            _ => ("INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
            status: Some(status),
        }
    }
}

/// Eligibility check endpoint
///
/// POST /api/check
async fn check_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let seq = state.next_seq();

    let (candidate, address, matched) = if let (Some(lat), Some(lng)) = (req.lat, req.lng) {
        let candidate = GeoPoint::new(lat, lng);
        candidate.validate().map_err(ApiError::from)?;
        (candidate, None, None)
    } else if let Some(address) = req.address {
        match state.geocoder().geocode(&address).await.map_err(ApiError::from)? {
            Some(m) => (m.point, Some(address), Some(m.display_name)),
            None => return Err(ApiError::from(Error::AddressNotFound(address))),
        }
    } else {
        return Err(ApiError::bad_request(
            "Provide an address or both lat and lng",
            "MISSING_CANDIDATE",
        ));
    };

    let mut report = area::report(candidate, &state.config.service).map_err(ApiError::from)?;
    report.address = address;
    report.matched = matched;

    Ok(Json(CheckResponse { seq, report }))
}

/// Boundary response body
#[derive(Debug, Serialize, Deserialize)]
pub struct BoundaryResponse {
    /// Configured service center
    pub center: GeoPoint,
    /// Configured service radius in miles
    pub radius_miles: f64,
    /// Number of vertices in the ring
    pub vertex_count: usize,
    /// The boundary as a GeoJSON FeatureCollection
    pub collection: serde_json::Value,
}

/// Boundary polygon endpoint
///
/// GET /api/boundary
async fn boundary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BoundaryResponse>, ApiError> {
    let service = &state.config.service;
    let ring =
        boundary_polygon(service, service.vertex_step_degrees).map_err(ApiError::from)?;

    let mut renderer = GeoJsonRenderer::new();
    renderer.draw_polygon(&ring);
    renderer.draw_marker(service.center);
    renderer.fit_bounds(&ring.vertices);

    Ok(Json(BoundaryResponse {
        center: service.center,
        radius_miles: service.radius_miles,
        vertex_count: ring.len(),
        collection: renderer.collection(),
    }))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Configured service center
    pub center: GeoPoint,
    /// Configured service radius in miles
    pub radius_miles: f64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        center: state.config.service.center,
        radius_miles: state.config.service.radius_miles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()))
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.radius_miles, 25.0);
        assert_eq!(status.center, GeoPoint::new(34.1, -84.5));
    }

    #[tokio::test]
    async fn test_boundary_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/boundary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let boundary: BoundaryResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(boundary.vertex_count, 72);
        assert_eq!(boundary.collection["type"], "FeatureCollection");
    }

    #[tokio::test]
    async fn test_check_with_coordinates() {
        let state = create_test_state();
        let app = create_router(state);

        let request_body = serde_json::json!({
            "lat": 34.2,
            "lng": -84.4
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let check: CheckResponse = serde_json::from_slice(&body).unwrap();

        assert!(check.seq >= 1);
        assert!(check.report.result.within_service);
        assert!(check.report.result.distance_miles > 0.0);
    }

    #[tokio::test]
    async fn test_check_outside_radius() {
        let state = create_test_state();
        let app = create_router(state);

        // Miami is far outside a 25-mile radius of Canton, GA
        let request_body = serde_json::json!({
            "lat": 25.76,
            "lng": -80.19
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let check: CheckResponse = serde_json::from_slice(&body).unwrap();

        assert!(!check.report.result.within_service);
    }

    #[tokio::test]
    async fn test_check_invalid_coordinates() {
        let state = create_test_state();
        let app = create_router(state);

        let request_body = serde_json::json!({
            "lat": 91.0,
            "lng": -84.4
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_COORDINATE");
    }

    #[tokio::test]
    async fn test_check_missing_candidate() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "MISSING_CANDIDATE");
    }

    #[tokio::test]
    async fn test_seq_increases_across_checks() {
        let state = create_test_state();
        let app = create_router(state);

        let request_body = serde_json::json!({ "lat": 34.2, "lng": -84.4 });

        let first = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let second = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let first_body = first.into_body().collect().await.unwrap().to_bytes();
        let second_body = second.into_body().collect().await.unwrap().to_bytes();
        let first: CheckResponse = serde_json::from_slice(&first_body).unwrap();
        let second: CheckResponse = serde_json::from_slice(&second_body).unwrap();

        assert!(second.seq > first.seq);
    }
}
