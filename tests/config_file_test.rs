use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;
use vodconvert::utils::validation::Validate;
use vodconvert::{CliArgs, ClientConfig, ConfigProvider};

#[tokio::test]
async fn test_config_file_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("client.toml");

    tokio::fs::write(
        &config_path,
        r#"
endpoint = "https://abcd1234.vodconvert.example.com"
region = "eu-central-1"
role_arn = "arn:vodconvert:iam/transcoder"
queue = "default"
timeout_seconds = 45
"#,
    )
    .await?;

    let config = ClientConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.endpoint(), "https://abcd1234.vodconvert.example.com");
    assert_eq!(config.role_arn(), Some("arn:vodconvert:iam/transcoder"));
    assert_eq!(config.queue(), Some("default"));
    assert_eq!(config.timeout_seconds(), 45);
    Ok(())
}

#[tokio::test]
async fn test_env_vars_expand_in_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("client.toml");

    std::env::set_var("VODCONVERT_IT_ROLE", "arn:vodconvert:iam/from-env");
    tokio::fs::write(
        &config_path,
        r#"
endpoint = "https://api.vodconvert.example.com"
role_arn = "${VODCONVERT_IT_ROLE}"
"#,
    )
    .await?;

    let config = ClientConfig::from_file(&config_path)?;
    assert_eq!(config.role_arn(), Some("arn:vodconvert:iam/from-env"));

    std::env::remove_var("VODCONVERT_IT_ROLE");
    Ok(())
}

#[tokio::test]
async fn test_cli_flags_override_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("client.toml");

    tokio::fs::write(
        &config_path,
        r#"
endpoint = "https://api.vodconvert.example.com"
queue = "default"
"#,
    )
    .await?;

    let args = CliArgs::parse_from([
        "vodconvert",
        "--job-file",
        "job.json",
        "--config-file",
        config_path.to_str().unwrap(),
        "--queue",
        "priority",
    ]);

    let config = args.client_config()?;
    assert_eq!(config.endpoint(), "https://api.vodconvert.example.com");
    assert_eq!(config.queue(), Some("priority"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = ClientConfig::from_file("/nonexistent/vodconvert.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_reports_config_error() {
    let result = ClientConfig::from_toml_str("endpoint = [not valid");
    assert!(result.is_err());
}
