// Domain layer: response models and ports (interfaces) the SDK is wired
// against. No transport code lives here.

pub mod model;
pub mod ports;

pub use crate::domain::model::{ApiRequest, ApiResponse, Endpoint, Job, JobStatus, Method};
pub use crate::domain::ports::{ConfigProvider, Dispatcher};
pub use crate::utils::error::Result;
