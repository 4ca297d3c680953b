//! Demo endpoints exercising the recovery boundary.

use axum::http::Method;

/// Answer every request with a fixed liveness body.
pub async fn ping() -> &'static str {
    "Ping!"
}

/// Panic on GET to exercise the recovery path; behave like `ping` for every
/// other method.
pub async fn rejection(method: Method) -> &'static str {
    if method == Method::GET {
        external_thirdparty();
    }
    "Ping!"
}

/// Stand-in for a third-party call that crashes unconditionally.
fn external_thirdparty() {
    panic!("Application Crash");
}
