//! Fail-open wrapper around an [`AdviceProvider`].

use tracing::{error, warn};

use crate::error::AdviceError;
use crate::provider::AdviceProvider;

/// Shown when the API key is not configured.
pub const MISSING_CONFIG_FALLBACK: &str = "I cannot provide advice right now because the API \
     configuration is missing. Please check your environment variables.";

/// Shown when the model returned no usable text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "I couldn't generate a response at this time.";

/// Shown for transport and service errors.
pub const GENERIC_FALLBACK: &str = "Sorry, I encountered an error while processing your \
     request. Please try again later.";

/// Forwards questions to a provider and never surfaces a raw error: any
/// failure collapses into one of the static fallback strings above, with
/// the technical detail going to the log only.
pub struct FinancialAdvisor<P> {
    provider: P,
}

impl<P: AdviceProvider> FinancialAdvisor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn ask(&self, question: &str) -> String {
        match self.provider.generate_advice(question).await {
            Ok(text) => text,
            Err(AdviceError::MissingApiKey) => {
                warn!("advice API key missing; answering with fallback");
                MISSING_CONFIG_FALLBACK.to_string()
            }
            Err(AdviceError::EmptyResponse) => {
                warn!("advice service returned empty response; answering with fallback");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(err) => {
                error!(error = %err, "advice request failed; answering with fallback");
                GENERIC_FALLBACK.to_string()
            }
        }
    }
}
