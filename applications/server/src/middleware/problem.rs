/// Problem response middleware
use crate::error::Problem;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Stamp problem responses with the path of the request that produced them
///
/// Handlers and extractors return `ServerError`, which has no access to the
/// request. Its response carries the `Problem` as an extension; this layer
/// rebuilds the body with `instance` set. Axum's bare 405 for a known path
/// with an unrouted method is turned into a problem too, keeping `Allow`.
pub async fn problem_instance(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    match response.extensions().get::<Problem>() {
        Some(problem) if problem.instance.is_none() => {
            problem.clone().with_instance(path).into_response()
        }
        Some(_) => response,
        None if response.status() == StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut problem = Problem::new(
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed",
                format!("Method {method} is not allowed for {path}"),
            )
            .with_instance(path)
            .into_response();
            if let Some(allow) = allow {
                problem.headers_mut().insert(header::ALLOW, allow);
            }
            problem
        }
        None => response,
    }
}
