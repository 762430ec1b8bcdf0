//! The provider seam.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::llm::prompt::GenerationRequest;

/// Capability shared by all text-generation providers: turn one request into
/// raw message text with exactly one outbound call. No retries, no fallback
/// to another provider.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Issue the provider call and return the raw response text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}
