use std::sync::Arc;

use crate::{
  config::RelayConfig,
  domains::contact::{
    model::ContactRequest,
    service::{ContactService, ContactServiceImpl, RelayResult},
  },
  email::EmailProvider,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(&self, req: ContactRequest) -> impl std::future::Future<Output = RelayResult> + Send;
  fn expose_error_details(&self) -> bool;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
  expose_error_details: bool,
}

impl SharedAppState {
  pub fn new<P>(provider: P, config: &RelayConfig) -> Self
  where
    P: EmailProvider + 'static,
  {
    let contact_service = Arc::new(ContactServiceImpl::new(provider, config.envelope.clone()));

    Self {
      contact_service,
      expose_error_details: config.expose_error_details,
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, req: ContactRequest) -> RelayResult {
    self.contact_service.submit(req).await
  }

  fn expose_error_details(&self) -> bool {
    self.expose_error_details
  }
}
