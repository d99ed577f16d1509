//! Tunable rules for a [`crate::GameSession`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// When a session declares the game over after a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndRule {
    /// Standard Othello: a side with no legal move passes, and the game ends
    /// only once neither side can move.
    DoublePass,
    /// The game ends as soon as the side that just moved has no legal move left.
    ActiveColor,
}

impl Default for EndRule {
    fn default() -> Self {
        Self::DoublePass
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("expected an end rule: double-pass or active-color")]
pub struct ParseEndRuleError;

impl std::str::FromStr for EndRule {
    type Err = ParseEndRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double-pass" => Ok(Self::DoublePass),
            "active-color" => Ok(Self::ActiveColor),
            _ => Err(ParseEndRuleError),
        }
    }
}

/// Session-level rules. Every field has a default, so partial TOML tables load.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub end_rule: EndRule,
    /// Reject moves from the side that is not due to play.
    pub strict_turns: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.end_rule, EndRule::DoublePass);
        assert!(!config.strict_turns);
    }

    #[test]
    fn end_rule_from_str() {
        assert_eq!("double-pass".parse(), Ok(EndRule::DoublePass));
        assert_eq!("active-color".parse(), Ok(EndRule::ActiveColor));
        assert_eq!("never".parse::<EndRule>(), Err(ParseEndRuleError));
    }

    #[test]
    fn end_rule_error_message() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(ParseEndRuleError);
        assert_eq!(
            err.to_string(),
            "expected an end rule: double-pass or active-color"
        );
    }
}
