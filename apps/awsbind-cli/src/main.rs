//! awsbind - invoke any EC2 or Chime operation from the command line.
//!
//! # Usage
//!
//! ```text
//! awsbind ec2 DescribeInstances '{"InstanceIds": ["i-0123456789abcdef0"]}'
//! awsbind chime ListAccounts '{"MaxResults": 10}'
//! awsbind ec2 --list
//! ```
//!
//! The input is a JSON object whose members use the PascalCase names of the
//! operation's input shape. It is read from stdin when the argument is `-`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Region to call |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Endpoint override |
//! | `AWS_PROFILE` | *(unset)* | Shared-credentials profile |
//! | `AWSBIND_LOG` | `info` | Log level filter |
//! | `AWSBIND_LOG_FORMAT` | *(unset)* | `json` for JSON log lines |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `AWSBIND_LOG`) |

use std::io::Read;

use anyhow::{Context, Result, bail};
use awsbind_chime::{ChimeClient, ChimeOperation};
use awsbind_core::ClientConfig;
use awsbind_ec2::{Ec2Client, Ec2Operation};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "awsbind")]
#[command(version, about = "Invoke Amazon EC2 and Chime operations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Region to call (overrides AWS_REGION)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Send requests to this URL instead of the service endpoint
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Shared-credentials profile (overrides AWS_PROFILE)
    #[arg(long, global = true)]
    profile: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Call an EC2 action
    Ec2(Invocation),
    /// Call a Chime operation
    Chime(Invocation),
}

#[derive(Debug, Args)]
struct Invocation {
    /// Operation name, e.g. DescribeInstances
    #[arg(required_unless_present = "list")]
    operation: Option<String>,

    /// JSON input, or `-` to read it from stdin
    input: Option<String>,

    /// Print the operation names and exit
    #[arg(long, conflicts_with = "operation")]
    list: bool,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise `AWSBIND_LOG` or `info`. Logs go to
/// stderr so stdout only carries the result.
fn init_tracing() -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = std::env::var("AWSBIND_LOG").unwrap_or_else(|_| "info".to_owned());
        EnvFilter::try_new(&level).with_context(|| format!("invalid log level filter: {level}"))?
    };

    let json = std::env::var("AWSBIND_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Resolve the client configuration from the environment and the flags.
fn build_config(cli: &Cli) -> Result<ClientConfig> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// Flags take the place of the variables they override, so an unusable
/// variable is never read when its flag is given.
fn build_config_with<F>(cli: &Cli, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let flag = |name: &str| match name {
        "AWS_REGION" | "AWS_DEFAULT_REGION" => cli.region.clone(),
        "AWS_ENDPOINT_URL" => cli.endpoint_url.clone(),
        "AWS_PROFILE" => cli.profile.clone(),
        _ => None,
    };
    ClientConfig::from_lookup(|name| flag(name).or_else(|| lookup(name)))
        .context("invalid AWS configuration")
}

/// Parse the operation input; a missing argument means an empty object.
fn parse_input(raw: Option<&str>) -> Result<Value> {
    let text = match raw {
        None => return Ok(Value::Object(serde_json::Map::new())),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            buf
        }
        Some(s) => s.to_owned(),
    };
    let value: Value = serde_json::from_str(&text).context("input is not valid JSON")?;
    if !value.is_object() {
        bail!("input must be a JSON object");
    }
    Ok(value)
}

fn operation_names(command: &Command) -> Vec<&'static str> {
    match command {
        Command::Ec2(_) => Ec2Operation::ALL.iter().map(Ec2Operation::as_str).collect(),
        Command::Chime(_) => ChimeOperation::ALL.iter().map(ChimeOperation::as_str).collect(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let invocation = match &cli.command {
        Command::Ec2(inv) | Command::Chime(inv) => inv,
    };
    if invocation.list {
        for name in operation_names(&cli.command) {
            println!("{name}");
        }
        return Ok(());
    }

    let operation = invocation
        .operation
        .as_deref()
        .context("an operation name is required")?;
    let input = parse_input(invocation.input.as_deref())?;
    let config = build_config(&cli)?;
    debug!(region = %config.region, operation, "Invoking operation");

    let output = match &cli.command {
        Command::Ec2(_) => {
            let client = Ec2Client::new(&config)?;
            client.invoke_json(operation, input).await?
        }
        Command::Chime(_) => {
            let client = ChimeClient::new(&config)?;
            client.invoke_json(operation, input).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_tracing() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
    if let Err(e) = run(cli).await {
        error!(error = %e, "Operation failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_should_verify_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_should_parse_operation_and_input() {
        let cli = Cli::try_parse_from([
            "awsbind",
            "--region",
            "eu-west-1",
            "ec2",
            "DescribeInstances",
            r#"{"InstanceIds":["i-1"]}"#,
        ])
        .unwrap();
        let Command::Ec2(inv) = &cli.command else {
            panic!("expected ec2 subcommand");
        };
        assert_eq!(inv.operation.as_deref(), Some("DescribeInstances"));
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));

        let config = build_config_with(&cli, |_| None).unwrap();
        assert_eq!(config.region.as_str(), "eu-west-1");
    }

    #[test]
    fn test_should_let_flags_override_unusable_environment() {
        let env: HashMap<&str, &str> = [
            ("AWS_REGION", "bad region!"),
            ("AWS_ENDPOINT_URL", "not-a-url"),
            ("AWS_PROFILE", "from-env"),
            ("AWSBIND_TIMEOUT_SECS", "7"),
        ]
        .into_iter()
        .collect();
        let lookup = |name: &str| env.get(name).map(|v| (*v).to_owned());

        let cli = Cli::try_parse_from([
            "awsbind",
            "--region",
            "eu-west-1",
            "--endpoint-url",
            "http://localhost:4566",
            "--profile",
            "from-flag",
            "ec2",
            "DescribeRegions",
        ])
        .unwrap();
        let config = build_config_with(&cli, lookup).unwrap();
        assert_eq!(config.region.as_str(), "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.profile.as_deref(), Some("from-flag"));
        assert_eq!(config.timeout, Duration::from_secs(7));

        let cli = Cli::try_parse_from(["awsbind", "ec2", "DescribeRegions"]).unwrap();
        assert!(build_config_with(&cli, lookup).is_err());
    }

    #[test]
    fn test_should_accept_list_without_operation() {
        let cli = Cli::try_parse_from(["awsbind", "chime", "--list"]).unwrap();
        let names = operation_names(&cli.command);
        assert_eq!(names.len(), 50);
        assert!(names.contains(&"CreateAccount"));

        let cli = Cli::try_parse_from(["awsbind", "ec2", "--list"]).unwrap();
        assert_eq!(operation_names(&cli.command).len(), 154);
    }

    #[test]
    fn test_should_require_operation_without_list() {
        assert!(Cli::try_parse_from(["awsbind", "ec2"]).is_err());
    }

    #[test]
    fn test_should_reject_bad_endpoint_flag() {
        let cli = Cli::try_parse_from([
            "awsbind",
            "--endpoint-url",
            "localhost:4566",
            "chime",
            "ListAccounts",
        ])
        .unwrap();
        assert!(build_config_with(&cli, |_| None).is_err());
    }

    #[test]
    fn test_should_parse_input_json() {
        assert_eq!(parse_input(None).unwrap(), serde_json::json!({}));
        assert_eq!(
            parse_input(Some(r#"{"MaxResults": 5}"#)).unwrap()["MaxResults"],
            5
        );
        assert!(parse_input(Some("[1, 2]")).is_err());
        assert!(parse_input(Some("{not json")).is_err());
    }
}
