use axum::{
  body::Bytes,
  extract::{FromRequest, Request, State},
  http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
  response::Json as JsonResponse,
  routing::post,
  Form, Router,
};

use super::model::{ContactRequest, ContactResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/send-email",
    post(send_email_handler)
      .options(preflight_handler)
      .fallback(method_not_allowed_handler),
  )
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Accepts either a JSON or an urlencoded form body.
pub struct ContactPayload(pub ContactRequest);

impl<S> FromRequest<S> for ContactPayload
where
  S: Send + Sync,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let is_form = req
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .is_some_and(|value| value.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE));

    if is_form {
      // Form only recognizes the lowercase media type.
      let (mut parts, body) = req.into_parts();
      parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
      let req = Request::from_parts(parts, body);

      let Form(payload) = Form::<ContactRequest>::from_request(req, state).await.map_err(|e| {
        tracing::warn!("Form rejection: {}", e.body_text());
        match e.status() {
          StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::bad_request("Invalid form body"),
          status => AppError::new(status, e.body_text()),
        }
      })?;
      return Ok(ContactPayload(payload));
    }

    let body = Bytes::from_request(req, state)
      .await
      .map_err(|e| AppError::new(e.status(), e.body_text()))?;
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(ContactPayload(ContactRequest::default()));
    }

    Ok(ContactPayload(serde_json::from_slice(&body)?))
  }
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  ContactPayload(payload): ContactPayload,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  state
    .submit_contact(payload)
    .await
    .map(|data| JsonResponse(ContactResponse::sent(data)))
    .map_err(|e| {
      let err = AppError::from(e);
      if state.expose_error_details() {
        err
      } else {
        err.without_details()
      }
    })
}

pub async fn preflight_handler() -> StatusCode {
  StatusCode::OK
}

pub async fn method_not_allowed_handler() -> AppError {
  AppError::method_not_allowed("Method not allowed")
}
