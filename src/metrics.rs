use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::warn;

const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];
const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// `OBSERVABILITY_ENABLED`, on unless set to `false` or `0`.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED
        .get_or_init(|| switch_enabled(std::env::var("OBSERVABILITY_ENABLED").ok().as_deref()))
}

fn switch_enabled(value: Option<&str>) -> bool {
    !matches!(value.map(str::trim), Some(v) if v == "0" || v.eq_ignore_ascii_case("false"))
}

/// Installs the Prometheus recorder. Until this succeeds every counter
/// below is a no-op.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Suffix("_duration_seconds".to_string()), LATENCY_BUCKETS)
        .and_then(|builder| builder.install_recorder())
        .inspect_err(|e| warn!(error = %e, "Prometheus recorder not installed, metrics disabled"))
        .ok()?;

    let upkeep = handle.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(UPKEEP_INTERVAL);
        loop {
            ticker.tick().await;
            upkeep.run_upkeep();
        }
    });

    Some(handle)
}

/// Route template for the `path` label. Unrouted requests share one label.
fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string())
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let method = req.method().to_string();
    let path = route_label(&req);
    let start = Instant::now();

    let active = gauge!("http_requests_active");
    active.increment(1.0);
    let response = next.run(req).await;
    active.decrement(1.0);

    let status = response.status().as_u16().to_string();
    histogram!("http_request_duration_seconds", "method" => method.clone(), "path" => path.clone())
        .record(start.elapsed().as_secs_f64());
    counter!("http_requests_total", "method" => method, "path" => path, "status" => status)
        .increment(1);

    response
}

pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_user_created() {
    counter!("users_created_total").increment(1);
}

pub fn track_user_login_success() {
    counter!("user_logins_total", "status" => "success").increment(1);
}

pub fn track_user_login_failure(reason: &'static str) {
    counter!("user_logins_total", "status" => "failure", "reason" => reason).increment(1);
}

pub fn track_jwt_issued() {
    counter!("jwt_tokens_issued_total").increment(1);
}

/// A protected route was called without a usable token.
pub fn track_auth_rejected(reason: &'static str) {
    counter!("auth_rejections_total", "reason" => reason).increment(1);
}

/// `operation` is one of "created", "updated", "deleted".
pub fn track_note_operation(operation: &'static str) {
    counter!("note_operations_total", "operation" => operation).increment(1);
}

/// A caller tried to change a note owned by someone else.
pub fn track_ownership_denied(operation: &'static str) {
    counter!("ownership_denials_total", "operation" => operation).increment(1);
}
