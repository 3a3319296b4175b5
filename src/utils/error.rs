use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::{json, Map, Value};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub details: Option<String>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      details: None,
    }
  }

  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }

  pub fn without_details(mut self) -> Self {
    self.details = None;
    self
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn method_not_allowed(message: impl Into<String>) -> Self {
    Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let mut body = Map::new();
    body.insert("error".to_string(), json!(self.message));
    if let Some(details) = self.details {
      body.insert("details".to_string(), json!(details));
    }

    (self.status_code, Json(Value::Object(body))).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::error!("JSON error: {:?}", error);
    AppError::bad_request("Invalid JSON format")
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::ValidationError(msg) => AppError::bad_request(msg),
      ContactServiceError::ProviderError(body) => {
        AppError::internal_server_error("Failed to send email").with_details(body)
      }
      ContactServiceError::InternalServerError(msg) => {
        AppError::internal_server_error("Internal server error").with_details(msg)
      }
    }
  }
}
