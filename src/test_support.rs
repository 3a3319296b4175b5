use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tower::ServiceExt;
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, layer::SubscriberExt, Layer};

use crate::{
  app::create_app,
  config::{EnvelopeConfig, ProviderConfig, RelayConfig},
  email::{EmailProvider, ResendConfig},
  state::SharedAppState,
};

pub fn test_config() -> RelayConfig {
  RelayConfig {
    bind_address: "127.0.0.1:0".parse().expect("socket address"),
    provider: ProviderConfig::Resend(ResendConfig {
      api_key: "re_test".to_string(),
      api_url: "http://127.0.0.1:1/emails".to_string(),
    }),
    envelope: EnvelopeConfig {
      from: "Portfolio Contact Form <noreply@example.com>".to_string(),
      recipients: vec!["owner@example.com".to_string()],
    },
    provider_timeout: std::time::Duration::from_secs(5),
    expose_error_details: true,
  }
}

pub fn app_with_provider<P>(provider: P, config: &RelayConfig) -> Router
where
  P: EmailProvider + 'static,
{
  create_app(SharedAppState::new(provider, config))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/x-www-form-urlencoded")
    .body(Body::from(body.to_string()))
    .expect("build request");

  send(app, request).await
}

pub async fn empty_request(app: Router, method: Method, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

struct ErrorEventCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorEventCounter {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    if *event.metadata().level() == Level::ERROR {
      self.0.fetch_add(1, Ordering::SeqCst);
    }
  }
}

/// Dispatcher counting `error` level events.
pub fn error_event_counter() -> (Arc<AtomicUsize>, Dispatch) {
  let count = Arc::new(AtomicUsize::new(0));
  let subscriber = tracing_subscriber::registry().with(ErrorEventCounter(count.clone()));
  (count, Dispatch::new(subscriber))
}
