use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

// 超过此长度的错误响应体不记录
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// 4xx 以 debug 级别记录，5xx 连同响应体以 error 级别记录
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;
    let status = response.status();

    if status.is_client_error() {
        debug!("{} {} -> {}", method, path, status);
        return response;
    }
    if !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => {
            error!(
                "{} {} -> {}, body: {}",
                method,
                path,
                status,
                String::from_utf8_lossy(&bytes)
            );
            // body 已被读取，需要重新装回
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            error!("{} {} -> {}, unreadable body: {}", method, path, status, e);
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::empty())
        }
    }
}
