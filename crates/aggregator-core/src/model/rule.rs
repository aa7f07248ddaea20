//! Rule descriptors.

use serde::{Deserialize, Serialize};

/// A single conditional rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: String,
    pub expression: String,
    #[serde(default)]
    pub comment: String,
    pub target: String,
}

/// A named, optionally inherited, group of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}
