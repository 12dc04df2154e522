use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::{AppState, error::AppError, middleware::log_errors, routes};

// 注册与登录
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(routes::company::list_companies))
        .route("/companies/{code}", get(routes::company::get_company))
}

fn burnout_routes() -> Router<AppState> {
    Router::new()
        .route("/burnout/leaderboard", get(routes::burnout::leaderboard))
        .route("/burnout/symptoms/{user_id}", get(routes::burnout::symptoms))
}

fn activity_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/activities",
            get(routes::activity::list_activities).post(routes::activity::create_activity),
        )
        .route(
            "/users/{user_id}/activities",
            get(routes::activity::list_user_activities),
        )
}

// 同一位置的路径参数必须同名，列表接口里的 {id} 是用户 id
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(routes::notification::create_notification),
        )
        .route(
            "/notifications/{id}",
            get(routes::notification::list_notifications),
        )
        .route(
            "/notifications/{id}/read",
            patch(routes::notification::mark_read),
        )
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// 组装全部路由，挂在配置的 api_base_uri 下
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth_routes())
        .merge(company_routes())
        .merge(burnout_routes())
        .merge(activity_routes())
        .merge(notification_routes())
        // 路径存在但方法不对，需在嵌套前设置才会作用到这些路由
        .method_not_allowed_fallback(method_not_allowed);

    let base = state.config.api_base_uri.clone();
    let router = if base.is_empty() {
        api
    } else {
        Router::new().nest(&base, api)
    };

    let router = router
        .fallback(not_found)
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http());

    // 开发模式允许任意来源跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
