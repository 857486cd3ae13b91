use serde::{Deserialize, Serialize};

/// Pass/warn/fail verdict FastQC attaches to each module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Pass,
    Warn,
    Fail,
    /// Anything FastQC did not write as pass/warn/fail
    #[default]
    Unknown,
}

impl ModuleStatus {
    /// Parse a status string as written in a module start line
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pass" => ModuleStatus::Pass,
            "warn" => ModuleStatus::Warn,
            "fail" => ModuleStatus::Fail,
            _ => ModuleStatus::Unknown,
        }
    }
}

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Module name with the start mark removed
    pub module: String,

    /// Status exactly as written in the report
    pub status: String,
}

impl SummaryRow {
    pub fn new(module: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            status: status.into(),
        }
    }

    /// The literal `("Module Name", "Status")` row that heads every summary
    #[must_use]
    pub fn header() -> Self {
        Self::new("Module Name", "Status")
    }

    #[must_use]
    pub fn status_kind(&self) -> ModuleStatus {
        ModuleStatus::parse(&self.status)
    }
}
