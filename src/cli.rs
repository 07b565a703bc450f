//! Command-line interface of the `awardwallet` binary.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::client::{AwardWalletClient, DEFAULT_TIMEOUT_SECS};
use crate::error::Error;
use crate::transport::RetryConfig;
use crate::types::{AccessLevel, AuthUrlRequest, Platform};

/// Process exit codes.
pub mod exit_codes {
    /// Request failed (API error, network error, unexpected payload).
    pub const FAILURE: u8 = 1;
    /// Bad configuration or arguments.
    pub const USAGE: u8 = 2;
}

/// Command-line client for the AwardWallet Business API
#[derive(Parser, Debug)]
#[command(name = "awardwallet", version, about, long_about = None)]
pub struct Cli {
    /// Business API key
    #[arg(long, env = "AWARDWALLET_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the Business API
    #[arg(long, env = "AWARDWALLET_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Maximum retries for rate limited or failed requests
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Supported loyalty providers
    Providers {
        #[command(subcommand)]
        command: ProvidersCommand,
    },

    /// Show a loyalty account and its owner
    Account {
        /// Account id
        account_id: i64,
    },

    /// Members managed by the business
    Members {
        #[command(subcommand)]
        command: MembersCommand,
    },

    /// Users connected to the business
    ConnectedUsers {
        #[command(subcommand)]
        command: ConnectedUsersCommand,
    },

    /// Create a URL inviting a user to connect
    AuthUrl {
        /// Platform the authorization page is rendered for
        #[arg(long, value_enum, default_value_t = PlatformArg::Desktop)]
        platform: PlatformArg,

        /// Access level to request (0 = numbers and status .. 3 = full control)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
        access_level: u8,

        /// Opaque value echoed back on the redirect
        #[arg(long)]
        state: Option<String>,

        /// Let the user choose which accounts to share
        #[arg(long)]
        granular_sharing: bool,
    },

    /// Resolve a connection code into the connected user id
    ConnectionInfo {
        /// Code received on the redirect
        code: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProvidersCommand {
    /// List all providers
    List,
    /// Show one provider
    Get {
        /// Provider code
        code: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MembersCommand {
    /// List all members
    List,
    /// Show one member with their accounts
    Get {
        /// Member id
        member_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConnectedUsersCommand {
    /// List all connected users
    List,
    /// Show one connected user with their shared accounts
    Get {
        /// User id
        user_id: i64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Desktop,
    Mobile,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Desktop => Self::Desktop,
            PlatformArg::Mobile => Self::Mobile,
        }
    }
}

impl Cli {
    /// Build a client from the global options.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if no API key was given.
    pub fn client(&self) -> Result<AwardWalletClient, Error> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Configuration(
                "no API key: pass --api-key or set AWARDWALLET_API_KEY".to_string(),
            )
        })?;

        let retry_config = self.max_retries.map(|max_retries| RetryConfig {
            max_retries,
            ..RetryConfig::default()
        });

        AwardWalletClient::new(
            api_key,
            self.base_url.as_deref(),
            Some(Duration::from_secs(self.timeout)),
            retry_config,
        )
    }
}

/// Execute the parsed command and print its result as JSON on stdout.
///
/// # Errors
///
/// Returns the client error of the failed request.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    let output = match &cli.command {
        Commands::Providers { command } => match command {
            ProvidersCommand::List => to_json(&client.providers().list().await?)?,
            ProvidersCommand::Get { code } => to_json(&client.providers().get(code).await?)?,
        },
        Commands::Account { account_id } => to_json(&client.accounts().get(*account_id).await?)?,
        Commands::Members { command } => match command {
            MembersCommand::List => to_json(&client.members().list().await?)?,
            MembersCommand::Get { member_id } => {
                to_json(&client.members().get(*member_id).await?)?
            }
        },
        Commands::ConnectedUsers { command } => match command {
            ConnectedUsersCommand::List => to_json(&client.connected_users().list().await?)?,
            ConnectedUsersCommand::Get { user_id } => {
                to_json(&client.connected_users().get(*user_id).await?)?
            }
        },
        Commands::AuthUrl {
            platform,
            access_level,
            state,
            granular_sharing,
        } => {
            let access_level = AccessLevel::try_from(*access_level).map_err(Error::Validation)?;
            let mut request = AuthUrlRequest::new((*platform).into(), access_level)
                .with_granular_sharing(*granular_sharing);
            if let Some(state) = state {
                request = request.with_state(state.as_str());
            }
            to_json(&client.connections().create_auth_url(&request).await?)?
        }
        Commands::ConnectionInfo { code } => {
            to_json(&client.connections().get_connection_info(code).await?)?
        }
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(Error::from)
}

/// Map a failed run to a process exit code.
#[must_use]
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<Error>() {
        Some(Error::Configuration(_) | Error::Validation(_)) => exit_codes::USAGE,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_providers_get() {
        let cli = Cli::try_parse_from(["awardwallet", "--api-key", "k", "providers", "get", "aa"])
            .expect("should parse");

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(matches!(
            cli.command,
            Commands::Providers { command: ProvidersCommand::Get { ref code } } if code == "aa"
        ));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "awardwallet",
            "members",
            "get",
            "42",
            "--timeout",
            "5",
            "--max-retries",
            "0",
        ])
        .expect("should parse");

        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.max_retries, Some(0));
        assert!(matches!(
            cli.command,
            Commands::Members { command: MembersCommand::Get { member_id: 42 } }
        ));
    }

    #[test]
    fn test_auth_url_defaults() {
        let cli = Cli::try_parse_from(["awardwallet", "auth-url"]).expect("should parse");
        match cli.command {
            Commands::AuthUrl {
                platform,
                access_level,
                state,
                granular_sharing,
            } => {
                assert_eq!(platform, PlatformArg::Desktop);
                assert_eq!(access_level, 1);
                assert!(state.is_none());
                assert!(!granular_sharing);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_auth_url_rejects_unknown_access_level() {
        let result = Cli::try_parse_from(["awardwallet", "auth-url", "--access-level", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["awardwallet", "--version"]).expect_err("version exits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(crate::VERSION));
    }

    #[test]
    fn test_client_requires_api_key() {
        let cli = Cli::try_parse_from(["awardwallet", "members", "list"]).expect("should parse");
        let cli = Cli { api_key: None, ..cli };

        let result = cli.client();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_exit_code_mapping() {
        let usage = anyhow::Error::from(Error::Configuration("missing".to_string()));
        assert_eq!(exit_code(&usage), exit_codes::USAGE);

        let api = anyhow::Error::from(Error::Api(crate::error::ApiError::from_status(
            500,
            "down".to_string(),
            None,
        )));
        assert_eq!(exit_code(&api), exit_codes::FAILURE);
    }
}
