//! Static agent roster.
//!
//! Agents are named capabilities grouped into suites. The roster order is
//! fixed and is the order every command reports agents in.

use serde::Serialize;

/// Group of agents selected together by `aimos run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentSuite {
    Security,
    Analysis,
    Operations,
}

impl AgentSuite {
    pub fn label(self) -> &'static str {
        match self {
            AgentSuite::Security => "security",
            AgentSuite::Analysis => "analysis",
            AgentSuite::Operations => "operations",
        }
    }

    /// Emoji prefix used when the suite is announced
    pub fn icon(self) -> &'static str {
        match self {
            AgentSuite::Security => "🔒",
            AgentSuite::Analysis => "📈",
            AgentSuite::Operations => "🛠️",
        }
    }

    /// Roster members of this suite, in roster order
    pub fn members(self) -> Vec<&'static Agent> {
        ROSTER.iter().filter(|agent| agent.suite == self).collect()
    }

    /// Member names joined for display, e.g. "SecuBot, ComplianceBot, PrivacyGuard"
    pub fn member_names(self) -> String {
        self.members()
            .iter()
            .map(|agent| agent.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub suite: AgentSuite,
}

const fn agent(name: &'static str, role: &'static str, suite: AgentSuite) -> Agent {
    Agent { name, role, suite }
}

static ROSTER: [Agent; 9] = [
    agent("CodeReviewer", "Code quality and review", AgentSuite::Analysis),
    agent("SecuBot", "Security vulnerability scanning", AgentSuite::Security),
    agent("ComplianceBot", "Regulatory compliance checks", AgentSuite::Security),
    agent("PrivacyGuard", "Data privacy and PII protection", AgentSuite::Security),
    agent("PerfAnalyzer", "Performance profiling and analysis", AgentSuite::Analysis),
    agent("DataAnalyst", "Usage and data analytics", AgentSuite::Analysis),
    agent("DocuBot", "Documentation generation", AgentSuite::Operations),
    agent("TestRunner", "Automated test execution", AgentSuite::Operations),
    agent("DeployBot", "Deployment orchestration", AgentSuite::Operations),
];

/// The full roster in fixed order
pub fn roster() -> &'static [Agent] {
    &ROSTER
}

/// Case-insensitive lookup by agent name
pub fn find(name: &str) -> Option<&'static Agent> {
    ROSTER
        .iter()
        .find(|agent| agent.name.eq_ignore_ascii_case(name.trim()))
}
