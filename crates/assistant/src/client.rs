use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String>;
}
