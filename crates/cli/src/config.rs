//! Command line and environment configuration.

use clap::{Args, Parser, ValueEnum};

use crate::commands::Command;

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Backend connection settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Root URL of the point of sale API
    #[arg(long, env = "NIXGELATO_API_URL", default_value = "http://localhost:3000", global = true)]
    pub api_url: String,

    /// Session token issued by the login screen
    #[arg(long, env = "NIXGELATO_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

/// NixGelato point of sale CLI
#[derive(Debug, Parser)]
#[command(name = "nixgelato", about = "NixGelato point of sale", long_about = None)]
pub struct CliConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() -> TestResult {
        let config = CliConfig::try_parse_from([
            "nixgelato",
            "catalog",
            "--api-url",
            "https://pos.example.com",
            "--token",
            "abc",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.api.api_url, "https://pos.example.com");
        assert_eq!(config.api.token.as_deref(), Some("abc"));
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(matches!(config.command, Command::Catalog));

        Ok(())
    }
}
