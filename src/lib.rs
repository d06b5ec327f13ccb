//! Client SDK for the VodConvert video transcoding API.
//!
//! The crate mirrors the service's job specification as typed settings
//! groups: parse a job spec, assemble the validated wire payload, and hand
//! it to a [`Dispatcher`] that owns transport and signing.

pub mod config;
pub mod core;
pub mod domain;
pub mod settings;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::ClientConfig;

pub use crate::core::{CreateJobRequest, JobClient};
pub use domain::model::{ApiRequest, ApiResponse, Endpoint, Job, JobStatus, Method};
pub use domain::ports::{ConfigProvider, Dispatcher};
pub use settings::{JobSettings, RequestBody, SettingsGroup};
pub use utils::error::{ConvertError, Result};
