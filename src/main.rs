use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use mysql_connectivity_check::commands;
use mysql_connectivity_check::utils::logging;
use mysql_connectivity_check::{CheckResult, EnvPolicy, OutputFormat};

/// Connect to MySQL using MYSQL_* environment variables and print `select version()`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output style for the result set
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Debug)]
    format: OutputFormat,

    /// Fail before connecting if any MYSQL_* variable is unset
    #[arg(long)]
    require_env: bool,
}

impl Cli {
    fn env_policy(&self) -> EnvPolicy {
        if self.require_env {
            EnvPolicy::Require
        } else {
            EnvPolicy::PassThrough
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logger();

    let cli = Cli::parse();

    let result = commands::check::execute(cli.env_policy(), cli.format).await;
    ExitCode::from(exit_status(&result))
}

/// Process exit status for a finished check, reporting failures on stderr
fn exit_status(result: &CheckResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("Connectivity check failed: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_defaults() {
        let cli = Cli::try_parse_from(["mysql-connectivity-check"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Debug);
        assert_eq!(cli.env_policy(), EnvPolicy::PassThrough);
    }

    #[test]
    fn flags_select_json_and_strict_env() {
        let cli = Cli::try_parse_from([
            "mysql-connectivity-check",
            "--format",
            "json",
            "--require-env",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.env_policy(), EnvPolicy::Require);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["mysql-connectivity-check", "--format", "xml"]).is_err());
    }

    #[test]
    fn success_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
    }

    #[test]
    fn any_failure_exits_non_zero() {
        let config_failure: CheckResult<()> = Err(
            mysql_connectivity_check::ConfigError::MissingVariable("MYSQL_HOST").into(),
        );
        let io_failure: CheckResult<()> = Err(
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into(),
        );

        assert_eq!(exit_status(&config_failure), 1);
        assert_eq!(exit_status(&io_failure), 1);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
