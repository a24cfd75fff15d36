use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no api key configured")]
    Unconfigured,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {code}")]
    Status { code: u16 },
    #[error("empty completion")]
    EmptyResponse,
}

/// A remote text-completion backend. One prompt in, one text reply out.
/// Implementations decide nothing about the prompt or the reply; shaping
/// and repair both live with the caller.
pub trait TextModel: Send + Sync {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, ModelError>> + Send;
}
