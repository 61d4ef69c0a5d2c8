use async_trait::async_trait;
use crate::types::UsageStats;

/// What a single successful remote call yields, before it is reduced to text
/// for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCompletion {
    pub text: String,
    pub model: String,
    pub usage: Option<UsageStats>,
}

#[async_trait]
pub trait RawRequester {
    async fn make_request(&mut self, prompt: &str) -> anyhow::Result<RawCompletion>;
}
