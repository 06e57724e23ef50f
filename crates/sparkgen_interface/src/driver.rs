//! Completion driver trait.

use async_trait::async_trait;
use sparkgen_core::{CompletionRequest, CompletionResponse, Credential};
use sparkgen_error::ModelsResult;

/// A chat-completion backend.
///
/// Implementations issue exactly one upstream call per `complete` and never
/// retry; callers decide what a failure means.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Sends `request`, authenticated with `credential`, and waits for the reply.
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> ModelsResult<CompletionResponse>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model used when the request does not override it.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> CompletionDriver for std::sync::Arc<D>
where
    D: CompletionDriver + ?Sized,
{
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> ModelsResult<CompletionResponse> {
        (**self).complete(credential, request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
