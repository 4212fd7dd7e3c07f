//! Financial-advice collaborator for SmartTax.
//!
//! The engine never depends on this crate; it is the boundary to an
//! opaque, non-deterministic hosted model. [`FinancialAdvisor`] is the
//! fail-open surface: every failure collapses into a static fallback
//! string, and the underlying error is only logged.

pub mod advisor;
pub mod chat;
pub mod error;
pub mod gemini;
pub mod provider;

pub use advisor::FinancialAdvisor;
pub use chat::{ChatMessage, ChatRole, Transcript};
pub use error::AdviceError;
pub use gemini::GeminiClient;
pub use provider::AdviceProvider;
