use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Collaborator that carries an assembled request to the service: HTTP
/// transport, request signing and retries all live behind this port.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn role_arn(&self) -> Option<&str>;
    fn queue(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
