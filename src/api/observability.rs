use crate::api::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// `GET /metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || {
            (
                StatusCode::NOT_FOUND,
                "Metrics not enabled or failed to initialize".to_string(),
            )
        },
        |handle| (StatusCode::OK, handle.render()),
    )
}

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Tour id of a `/tours/{tour_id}/...` request, if the route has one.
fn route_tour_id(route: Option<&str>, path: &str) -> Option<i32> {
    if !route?.starts_with("/tours/{tour_id}") {
        return None;
    }
    path.trim_start_matches('/')
        .split('/')
        .nth(1)
        .and_then(|segment| segment.parse().ok())
}

const fn outcome(status: u16) -> &'static str {
    match status {
        500.. => "error",
        400..=499 => "client_error",
        _ => "success",
    }
}

/// Request span plus the `booktour_http_*` counter and latency histogram.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let tour_id = route_tour_id(route.as_deref(), &path);

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %path,
        route = route.as_deref(),
        tour_id = tour_id,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let elapsed = start.elapsed();

        // Unmatched requests share one label so random paths cannot grow the series.
        let labels = [
            ("method", method),
            ("route", route.unwrap_or_else(|| "unmatched".to_string())),
            ("status", status.to_string()),
        ];
        metrics::counter!("booktour_http_requests_total", &labels).increment(1);
        metrics::histogram!("booktour_http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        info!(
            status_code = status,
            outcome = outcome(status),
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_id_comes_from_tour_routes_only() {
        assert_eq!(
            route_tour_id(Some("/tours/{tour_id}/ratings"), "/tours/42/ratings"),
            Some(42)
        );
        assert_eq!(route_tour_id(Some("/tours/{tour_id}"), "/tours/7"), Some(7));
        assert_eq!(route_tour_id(Some("/ratings/{id}"), "/ratings/7"), None);
        assert_eq!(route_tour_id(Some("/tours"), "/tours"), None);
        assert_eq!(route_tour_id(None, "/tours/9/ratings"), None);
    }

    #[test]
    fn outcome_by_status_class() {
        assert_eq!(outcome(201), "success");
        assert_eq!(outcome(404), "client_error");
        assert_eq!(outcome(500), "error");
    }
}
