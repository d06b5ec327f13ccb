use async_trait::async_trait;
use clap::Parser;
use serde_json::{json, Value};
use vodconvert::utils::validation::Validate;
use vodconvert::utils::{error::Result, logger};
use vodconvert::{
    ApiRequest, ApiResponse, CliArgs, ConvertError, CreateJobRequest, Dispatcher, JobClient,
    SettingsGroup,
};

/// Prints the assembled request instead of sending it. Transport and signing
/// belong to a separate collaborator, so the CLI stops at the wire payload.
struct DryRunDispatcher {
    compact: bool,
}

#[async_trait]
impl Dispatcher for DryRunDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        if let Some(body) = &request.body {
            let rendered = if self.compact {
                serde_json::to_string(body)?
            } else {
                serde_json::to_string_pretty(body)?
            };
            println!("{}", rendered);
        }
        Ok(ApiResponse {
            status: 201,
            body: json!({ "job": { "id": "dry-run", "status": "SUBMITTED" } }),
        })
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting vodconvert CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.client_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(&args.job_file)?;
    let spec: Value = serde_json::from_str(&raw)?;
    let request = match CreateJobRequest::from_value(&spec) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ Could not parse job spec: {}", e);
            std::process::exit(2);
        }
    };

    let dispatcher = DryRunDispatcher {
        compact: args.compact,
    };
    let client = JobClient::new(dispatcher, config);

    match client.create_job(&request).await {
        Ok(_) => {
            tracing::info!("✅ Job request is valid");
        }
        Err(e @ ConvertError::InvalidEnumValueError { .. }) => {
            tracing::error!("Job request rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Job request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
