// HTTP API
// Routes for /api/v1/users plus request logging and panic recovery

use crate::error::{RpcError, RpcResult};
use crate::handlers::UserHandler;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use registry_service::{User, UserPayload};
use serde_json::{json, Value};
use std::any::Any;
use std::future::Future;
use std::io;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

pub const USERS_PATH: &str = "/api/v1/users";
pub const USER_PATH: &str = "/api/v1/users/{id}";

/// Method and path of every route, for the startup log.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", USERS_PATH),
    ("POST", USERS_PATH),
    ("GET", USER_PATH),
    ("PUT", USER_PATH),
    ("DELETE", USER_PATH),
];

pub struct HttpServer {
    user_handler: UserHandler,
}

impl HttpServer {
    pub fn new() -> Self {
        Self::with_handler(UserHandler::new())
    }

    pub fn with_handler(user_handler: UserHandler) -> Self {
        Self { user_handler }
    }

    pub fn user_handler(&self) -> &UserHandler {
        &self.user_handler
    }

    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route(USERS_PATH, get(list_users).post(create_user))
            .route(
                USER_PATH,
                get(get_user).put(update_user).delete(delete_user),
            )
            .fallback(route_not_found)
            .method_not_allowed_fallback(route_not_found)
            .with_state(self.user_handler.clone());

        with_middleware(routes)
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            info!("HTTP server listening on {}", addr);
        }
        for (method, path) in ROUTES {
            info!("route {:<6} {}", method, path);
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Request logging and panic recovery applied to every route.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    RpcError::Internal(detail).into_response()
}

fn parse_id(raw: &str) -> RpcResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| RpcError::InvalidId(raw.to_string()))
}

fn parse_payload(payload: Result<Json<UserPayload>, JsonRejection>) -> RpcResult<UserPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| RpcError::InvalidBody(rejection.body_text()))
}

async fn list_users(State(handler): State<UserHandler>) -> Json<Value> {
    let users = handler.list_users().await;
    Json(json!({ "status": "ok", "users": users }))
}

async fn create_user(
    State(handler): State<UserHandler>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> RpcResult<impl IntoResponse> {
    let payload = parse_payload(payload)?;
    handler.create_user(payload).await;
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "message": "user created" })),
    ))
}

async fn get_user(
    State(handler): State<UserHandler>,
    Path(id): Path<String>,
) -> RpcResult<Json<User>> {
    let id = parse_id(&id)?;
    Ok(Json(handler.get_user(id).await?))
}

async fn update_user(
    State(handler): State<UserHandler>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> RpcResult<Json<Value>> {
    let id = parse_id(&id)?;
    let payload = parse_payload(payload)?;
    handler.update_user(id, payload).await?;
    Ok(Json(json!({
        "status": "ok",
        "message": "user updated successfully",
    })))
}

async fn delete_user(
    State(handler): State<UserHandler>,
    Path(id): Path<String>,
) -> RpcResult<Json<Value>> {
    let id = parse_id(&id)?;
    let index = handler.delete_user(id).await?;
    Ok(Json(json!({
        "status": "ok",
        "message": format!("deleted on index {}", index),
    })))
}

async fn route_not_found() -> RpcError {
    RpcError::RouteNotFound
}
