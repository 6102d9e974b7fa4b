//! Warden - quorum-gated secrets for teams.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warden::cli::output;
use warden::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("WARDEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("warden=debug")
        } else {
            EnvFilter::new("warden=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let member = cli.member.unwrap_or_else(whoami::username);

    if let Err(e) = execute(cli.command, &member) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            warden::error::Error::Config(warden::error::ConfigError::NotInitialized) => {
                Some("run: warden init".to_string())
            }
            warden::error::Error::Quorum(warden::error::QuorumError::NotApproved(id)) => {
                Some(format!("check approvals with: warden status {}", id))
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
