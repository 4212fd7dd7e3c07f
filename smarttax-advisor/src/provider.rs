use async_trait::async_trait;

use crate::error::AdviceError;

/// A remote service that turns a free-text question into free-text advice.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn generate_advice(&self, question: &str) -> Result<String, AdviceError>;
}
