use serde::Serialize;

/// Result of applying one schema group.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupOutcome {
    pub name: String,
    /// Driver message when the group failed, `None` on success.
    pub error: Option<String>,
}

impl GroupOutcome {
    pub fn ok(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error: None,
        }
    }

    pub fn failed(name: &str, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything that happened during one initialization run.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    pub database: String,
    pub started_at: String, // RFC 3339, local time
    pub open_error: Option<String>,
    pub close_error: Option<String>,
    pub outcomes: Vec<GroupOutcome>,
}

impl InitReport {
    pub fn new(database: &str, started_at: String) -> Self {
        Self {
            database: database.to_string(),
            started_at,
            open_error: None,
            close_error: None,
            outcomes: Vec::new(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn outcome(&self, name: &str) -> Option<&GroupOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// True when the database opened and closed cleanly and every group applied.
    pub fn is_clean(&self) -> bool {
        self.open_error.is_none() && self.close_error.is_none() && self.failures().next().is_none()
    }
}
