pub mod client;
pub mod request;

pub use crate::core::client::JobClient;
pub use crate::core::request::CreateJobRequest;
pub use crate::domain::model::{ApiRequest, ApiResponse, Endpoint, Job, JobStatus, Method};
pub use crate::domain::ports::{ConfigProvider, Dispatcher};
pub use crate::utils::error::Result;
