use clap::Parser;

use crate::config::ClientConfig;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "vodconvert")]
#[command(about = "Assemble and validate VodConvert transcoding job requests")]
pub struct CliArgs {
    /// Job spec file (JSON, job-spec field casing)
    #[arg(long)]
    pub job_file: String,

    /// Optional TOML client configuration file
    #[arg(long)]
    pub config_file: Option<String>,

    #[arg(long, default_value = "https://api.vodconvert.example.com")]
    pub endpoint: String,

    #[arg(long)]
    pub role_arn: Option<String>,

    #[arg(long)]
    pub queue: Option<String>,

    #[arg(long, help = "Print the wire payload on a single line")]
    pub compact: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Merge the optional config file with command-line overrides. Flags win
    /// over file values.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config_file {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::new(self.endpoint.clone()),
        };

        if self.config_file.is_some() && self.endpoint != CliArgs::default_endpoint() {
            config.endpoint = self.endpoint.clone();
        }
        if self.role_arn.is_some() {
            config.role_arn = self.role_arn.clone();
        }
        if self.queue.is_some() {
            config.queue = self.queue.clone();
        }

        Ok(config)
    }

    fn default_endpoint() -> &'static str {
        "https://api.vodconvert.example.com"
    }
}
