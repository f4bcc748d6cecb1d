use std::future::Future;

use folio_models::contact::{ContactPayload, RelayResult};

/// The mail relay. Validates a payload and delivers a one-shot notification
/// to the operator inbox. Every invocation produces exactly one
/// [`RelayResult`]; validation failures, transport errors, and anything
/// unexpected all collapse into a failure result rather than propagating.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    fn send_notification(
        &self,
        payload: ContactPayload,
    ) -> impl Future<Output = RelayResult> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_notification(mut self, payload: ContactPayload, result: RelayResult) -> Self {
        self.expect_send_notification()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
