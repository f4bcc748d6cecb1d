use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use tracing::{debug, debug_span, Instrument};

use super::request_id::RequestId;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    let version = request.version();
    let method = request.method().clone();
    let route = request.uri().clone();
    let request_id = request.extensions().get::<RequestId>().copied();
    let span = debug_span!(
        "http-request",
        ?version,
        %method,
        %route,
        request_id = request_id.map(tracing::field::display)
    );

    async move {
        debug!("started processing request");
        let start = Instant::now();
        let response = next.run(request).await;
        let latency = start.elapsed();
        let status = response.status();
        debug!(?latency, %status, "finished processing request");
        response
    }
    .instrument(span)
    .await
}
