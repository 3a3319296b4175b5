use axum::{
  http::{HeaderName, Method},
  response::Json,
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api", contact_routes())
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::OPTIONS,
      Method::PATCH,
      Method::DELETE,
      Method::POST,
      Method::PUT,
    ])
    .allow_headers([
      HeaderName::from_static("x-csrf-token"),
      HeaderName::from_static("x-requested-with"),
      HeaderName::from_static("accept"),
      HeaderName::from_static("accept-version"),
      HeaderName::from_static("content-length"),
      HeaderName::from_static("content-md5"),
      HeaderName::from_static("content-type"),
      HeaderName::from_static("date"),
      HeaderName::from_static("x-api-version"),
    ])
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}
