//! Rota configuration.
//!
//! Load scheduler settings from TOML so the rule set and the quota policy
//! can change without code changes.
//!
//! # Examples
//!
//! ```
//! use u_rota::config::RotaConfig;
//! use u_rota::scheduler::QuotaPolicy;
//!
//! let config = RotaConfig::from_toml_str(r#"
//!     quota_policy = "clamp"
//!     rules = ["shift_availability", "allocation"]
//! "#).unwrap();
//!
//! assert_eq!(config.quota_policy, QuotaPolicy::Clamp);
//! assert_eq!(config.rule_set().len(), 2);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use u_rota::config::RotaConfig;
//!
//! let config = RotaConfig::load("rota.toml").unwrap_or_default();
//! assert_eq!(config.rule_set().len(), 3);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::eligibility::{RuleKind, RuleSet};
use crate::error::{Result, RotaError};
use crate::scheduler::QuotaPolicy;

/// Scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RotaConfig {
    /// What to do when an assignment would exhaust a quota further.
    #[serde(default)]
    pub quota_policy: QuotaPolicy,

    /// Rules in evaluation order. `None` means the standard set.
    #[serde(default)]
    pub rules: Option<Vec<RuleKind>>,

    /// Roster file (JSON).
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

impl RotaConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// lists a rule twice.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    pub fn with_quota_policy(mut self, policy: QuotaPolicy) -> Self {
        self.quota_policy = policy;
        self
    }

    pub fn with_rules(mut self, rules: Vec<RuleKind>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_roster(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster = Some(path.into());
        self
    }

    /// Builds the configured rule set.
    pub fn rule_set(&self) -> RuleSet {
        match &self.rules {
            Some(kinds) => RuleSet::from_kinds(kinds),
            None => RuleSet::standard(),
        }
    }

    fn check(&self) -> Result<()> {
        if let Some(kinds) = &self.rules {
            for (i, kind) in kinds.iter().enumerate() {
                if kinds[..i].contains(kind) {
                    return Err(RotaError::Config(format!("rule {kind:?} listed twice")));
                }
            }
        }
        Ok(())
    }
}
