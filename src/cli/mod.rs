//! CLI interface for AIMOS.
//!
//! Parses the command table and dispatches to the command implementations,
//! which render into any `Write` sink.

mod commands;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Settings;
use crate::{AimosError, AimosResult};

pub use commands::*;

#[derive(Parser)]
#[command(name = "aimos")]
#[command(about = "AI-Model Marketplace OS: inspect and run the agent roster")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file path (TOML format)
    #[arg(long, global = true, env = "AIMOS_CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the available agents
    Agents {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a single agent, a suite, or every agent
    Run {
        /// Name of the agent to run
        #[arg(long, value_name = "NAME")]
        agent: Option<String>,

        /// Run all agents
        #[arg(long)]
        all: bool,

        /// Run the security suite
        #[arg(long)]
        security: bool,

        /// Run the analysis suite
        #[arg(long)]
        analysis: bool,
    },

    /// Show system status
    Status,

    /// Show generated reports
    Reports,

    /// Initialize the AIMOS environment
    Init,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Exit status for a parse failure: help and version exit 0, any
    /// unrecognized input exits 1 like an unknown command does
    pub fn parse_exit_code(err: &clap::Error) -> u8 {
        if err.use_stderr() {
            1
        } else {
            0
        }
    }

    /// Resolve settings for this invocation; `--log-level` beats file and env
    pub fn settings(&self) -> AimosResult<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Run the CLI command against stdout
    pub async fn run(self) -> AimosResult<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out).await?;
        out.flush()?;
        Ok(())
    }

    /// Run the CLI command, rendering output into `out`
    pub async fn execute<W: Write>(self, out: &mut W) -> AimosResult<()> {
        match self.command {
            None => {
                debug!("No command given, printing help");
                help(out)
            }
            Some(Commands::Agents { json }) => agents(out, json),
            Some(Commands::Run {
                agent,
                all,
                security,
                analysis,
            }) => run(out, RunSelection::from_flags(agent, all, security, analysis)),
            Some(Commands::Status) => status(out),
            Some(Commands::Reports) => reports(out),
            Some(Commands::Init) => init(out),
            Some(Commands::Unknown(args)) => Err(AimosError::unknown_command(args)),
        }
    }
}
