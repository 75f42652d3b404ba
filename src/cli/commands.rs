//! CLI command implementations.

use clap::CommandFactory;
use std::io::Write;
use tracing::{debug, info, warn};

use crate::agents::{self, AgentSuite};
use crate::AimosResult;

use super::Cli;

/// Which agents `aimos run` was asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSelection {
    Agent(String),
    All,
    Suite(AgentSuite),
    Unspecified,
}

impl RunSelection {
    /// Resolve `run` flags; precedence is agent, all, security, analysis
    pub fn from_flags(agent: Option<String>, all: bool, security: bool, analysis: bool) -> Self {
        match (agent, all, security, analysis) {
            (Some(name), ..) => Self::Agent(name),
            (None, true, ..) => Self::All,
            (None, false, true, _) => Self::Suite(AgentSuite::Security),
            (None, false, false, true) => Self::Suite(AgentSuite::Analysis),
            (None, false, false, false) => Self::Unspecified,
        }
    }
}

/// Print the generated help text
pub fn help<W: Write>(out: &mut W) -> AimosResult<()> {
    write!(out, "{}", Cli::command().render_help())?;
    Ok(())
}

/// List the agent roster
pub fn agents<W: Write>(out: &mut W, json: bool) -> AimosResult<()> {
    debug!(count = agents::roster().len(), json, "Listing agent roster");

    if json {
        let output = serde_json::to_string_pretty(agents::roster())?;
        writeln!(out, "{}", output)?;
        return Ok(());
    }

    writeln!(out, "🤖 Available AIMOS Agents:")?;
    for agent in agents::roster() {
        writeln!(out, "  ✅ {} - {}", agent.name, agent.role)?;
    }
    Ok(())
}

/// Report which agents would run
pub fn run<W: Write>(out: &mut W, selection: RunSelection) -> AimosResult<()> {
    info!(?selection, "Run requested");

    match selection {
        RunSelection::Agent(name) => {
            if agents::find(&name).is_none() {
                warn!(agent = %name, "Agent is not in the roster");
            }
            writeln!(out, "🚀 Running agent: {}...", name)?;
        }
        RunSelection::All => {
            writeln!(out, "🚀 Running all agents...")?;
        }
        RunSelection::Suite(suite) => {
            writeln!(
                out,
                "{} Running {} suite: {}",
                suite.icon(),
                suite.label(),
                suite.member_names()
            )?;
        }
        RunSelection::Unspecified => {
            writeln!(
                out,
                "⚠️  Please specify which agents to run: --agent <name>, --all, --security or --analysis"
            )?;
        }
    }
    Ok(())
}

/// Show system status
pub fn status<W: Write>(out: &mut W) -> AimosResult<()> {
    let count = agents::roster().len();

    writeln!(out, "📊 AIMOS System Status")?;
    writeln!(out, "  Agents: {} registered, {} active", count, count)?;
    writeln!(out, "  Prompt memory: online")?;
    writeln!(out, "  Dashboard: http://localhost:8080")?;
    writeln!(out, "  Last run: never")?;
    Ok(())
}

/// Show generated reports
pub fn reports<W: Write>(out: &mut W) -> AimosResult<()> {
    writeln!(out, "📄 Reports directory: ./reports")?;
    writeln!(out, "  No reports generated yet.")?;
    Ok(())
}

/// Initialize the AIMOS environment
pub fn init<W: Write>(out: &mut W) -> AimosResult<()> {
    writeln!(out, "🚀 Initializing AIMOS environment...")?;
    writeln!(out, "  ✅ Configuration loaded")?;
    writeln!(out, "  ✅ Ready. Try 'aimos agents' or 'aimos run --all'")?;
    Ok(())
}
