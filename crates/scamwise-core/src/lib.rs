#![warn(missing_docs)]
//! # scamwise-core
//!
//! ## Purpose
//! Defines the text risk classifier used across the `scamwise` workspace.
//!
//! ## Responsibilities
//! - Represent risk tiers and the verdict returned for one analysis.
//! - Express keyword rules as an explicit ordered cascade.
//! - Classify arbitrary text against the built-in cascade.
//!
//! ## Data flow
//! Raw text -> lower-cased once -> [`RuleCascade::evaluate`] walks
//! [`RiskRule`]s in order -> first match (or fallback) becomes the
//! [`RiskVerdict`].
//!
//! ## Ownership and lifetimes
//! Rules and messages are `'static` tables. Verdicts own their message so
//! callers can keep them past the input buffer's lifetime.
//!
//! ## Error model
//! Classification is total over all strings and has no error type. Empty
//! input rejection belongs to the shell (`scamwise-ui`).
//!
//! ## Example
//! ```rust
//! use scamwise_core::{classify, RiskTier};
//!
//! let verdict = classify("You WIN a FREE prize!");
//! assert_eq!(verdict.tier, RiskTier::High);
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Message for the prize scam rule.
pub const PRIZE_SCAM_MESSAGE: &str =
    "High Risk: Potential prize scam detected. Be cautious of 'free' prizes.";
/// Message for the urgency rule.
pub const URGENCY_MESSAGE: &str = "Medium Risk: Urgency tactics detected. Take time to verify.";
/// Message for the credential phishing rule.
pub const PHISHING_MESSAGE: &str =
    "Warning: Potential phishing attempt. Never share login credentials.";
/// Message returned when no rule matches.
pub const ALL_CLEAR_MESSAGE: &str = "No immediate threats detected. Stay vigilant!";

/// Severity attached to a verdict.
///
/// Variants are declared from least to most severe and the derived ordering
/// follows that order. `Warning` ranks below `Medium`, matching its position
/// after the urgency rule in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// No rule matched.
    None,
    /// Low risk. No built-in rule produces it.
    Low,
    /// Credential phishing indicators.
    Warning,
    /// Urgency pressure tactics.
    Medium,
    /// Prize scam indicators.
    High,
}

impl RiskTier {
    /// Short icon prefix shown in front of a verdict message.
    pub fn icon(self) -> &'static str {
        match self {
            RiskTier::None => "✅",
            RiskTier::Low | RiskTier::Warning | RiskTier::Medium | RiskTier::High => "⚠️",
        }
    }

    /// Stable lower-case label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::None => "none",
            RiskTier::Low => "low",
            RiskTier::Warning => "warning",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskVerdict {
    /// Severity tier.
    pub tier: RiskTier,
    /// Human-readable explanation paired with the matched rule.
    pub message: String,
}

impl RiskVerdict {
    /// Creates a verdict from tier and message.
    pub fn new(tier: RiskTier, message: impl Into<String>) -> Self {
        Self {
            tier,
            message: message.into(),
        }
    }

    /// Renders the verdict the way the analyzer notice shows it.
    pub fn display_text(&self) -> String {
        format!("{} {}", self.tier.icon(), self.message)
    }
}

/// Keyword condition evaluated against lower-cased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordPredicate {
    /// Every keyword must appear.
    AllOf(&'static [&'static str]),
    /// At least one keyword must appear.
    AnyOf(&'static [&'static str]),
}

impl KeywordPredicate {
    /// Returns `true` when `lowered` satisfies the predicate.
    ///
    /// Matching is literal substring containment with no word boundaries.
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            KeywordPredicate::AllOf(keywords) => {
                keywords.iter().all(|keyword| lowered.contains(keyword))
            }
            KeywordPredicate::AnyOf(keywords) => {
                keywords.iter().any(|keyword| lowered.contains(keyword))
            }
        }
    }
}

/// One entry of a rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskRule {
    /// Stable rule name for logs and tests.
    pub name: &'static str,
    /// Condition that selects this rule.
    pub predicate: KeywordPredicate,
    /// Tier reported on match.
    pub tier: RiskTier,
    /// Message reported on match.
    pub message: &'static str,
}

impl RiskRule {
    /// Builds the verdict this rule reports.
    pub fn verdict(&self) -> RiskVerdict {
        RiskVerdict::new(self.tier, self.message)
    }
}

/// Built-in rules in precedence order.
pub const BUILTIN_RULES: &[RiskRule] = &[
    RiskRule {
        name: "prize_scam",
        predicate: KeywordPredicate::AllOf(&["free", "win"]),
        tier: RiskTier::High,
        message: PRIZE_SCAM_MESSAGE,
    },
    RiskRule {
        name: "urgency",
        predicate: KeywordPredicate::AnyOf(&["urgent", "immediate"]),
        tier: RiskTier::Medium,
        message: URGENCY_MESSAGE,
    },
    RiskRule {
        name: "credential_phishing",
        predicate: KeywordPredicate::AnyOf(&["password", "login"]),
        tier: RiskTier::Warning,
        message: PHISHING_MESSAGE,
    },
];

/// Ordered rule list with a fallback verdict. First match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCascade {
    rules: Cow<'static, [RiskRule]>,
    fallback_tier: RiskTier,
    fallback_message: &'static str,
}

impl RuleCascade {
    /// Creates a cascade from rules in precedence order.
    pub fn new(
        rules: impl Into<Cow<'static, [RiskRule]>>,
        fallback_tier: RiskTier,
        fallback_message: &'static str,
    ) -> Self {
        Self {
            rules: rules.into(),
            fallback_tier,
            fallback_message,
        }
    }

    /// Returns the built-in cascade. Borrows [`BUILTIN_RULES`] without copying.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_RULES, RiskTier::None, ALL_CLEAR_MESSAGE)
    }

    /// Returns the first rule matching `text`, if any.
    pub fn matching_rule(&self, text: &str) -> Option<&RiskRule> {
        let lowered = text.to_lowercase();
        first_match(&self.rules, &lowered)
    }

    /// Classifies `text`. Never fails.
    pub fn evaluate(&self, text: &str) -> RiskVerdict {
        self.evaluate_with_rule(text).0
    }

    /// Classifies `text` and reports which rule fired (`None` for fallback).
    pub fn evaluate_with_rule(&self, text: &str) -> (RiskVerdict, Option<&'static str>) {
        let lowered = text.to_lowercase();
        match first_match(&self.rules, &lowered) {
            Some(rule) => (rule.verdict(), Some(rule.name)),
            None => (
                RiskVerdict::new(self.fallback_tier, self.fallback_message),
                None,
            ),
        }
    }

}

fn first_match<'r>(rules: &'r [RiskRule], lowered: &str) -> Option<&'r RiskRule> {
    rules.iter().find(|rule| rule.predicate.matches(lowered))
}

impl Default for RuleCascade {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classifies `text` against the built-in cascade.
///
/// Total over all strings: empty, whitespace-only, non-ASCII, and very long
/// inputs all produce exactly one verdict.
pub fn classify(text: &str) -> RiskVerdict {
    RuleCascade::builtin().evaluate(text)
}

#[cfg(test)]
mod tests {
    //! Unit tests for predicates and cascade precedence.

    use super::*;

    #[test]
    fn all_of_requires_every_keyword() {
        let predicate = KeywordPredicate::AllOf(&["free", "win"]);
        assert!(predicate.matches("free winter coat"));
        assert!(!predicate.matches("free coffee"));
    }

    #[test]
    fn any_of_accepts_single_keyword() {
        let predicate = KeywordPredicate::AnyOf(&["urgent", "immediate"]);
        assert!(predicate.matches("immediately"));
        assert!(!predicate.matches("later"));
    }

    #[test]
    fn cascade_stops_at_first_match() {
        let cascade = RuleCascade::builtin();
        let rule = cascade
            .matching_rule("free win urgent password")
            .expect("prize rule should match");
        assert_eq!(rule.name, "prize_scam");
    }

    #[test]
    fn evaluate_with_rule_names_the_fired_rule() {
        let cascade = RuleCascade::builtin();
        let (verdict, rule) = cascade.evaluate_with_rule("reset your PASSWORD");
        assert_eq!(verdict.tier, RiskTier::Warning);
        assert_eq!(rule, Some("credential_phishing"));
        assert_eq!(cascade.evaluate_with_rule("coffee").1, None);
    }

    #[test]
    fn builtin_cascade_borrows_static_rules() {
        let cascade = RuleCascade::builtin();
        assert!(matches!(cascade.rules, Cow::Borrowed(_)));
        assert_eq!(cascade.rules.len(), BUILTIN_RULES.len());
    }

    #[test]
    fn custom_cascade_uses_its_fallback() {
        let no_rules: Vec<RiskRule> = Vec::new();
        let cascade = RuleCascade::new(no_rules, RiskTier::Low, "nothing configured");
        let verdict = cascade.evaluate("urgent");
        assert_eq!(verdict.tier, RiskTier::Low);
        assert_eq!(verdict.message, "nothing configured");
    }

    #[test]
    fn warning_ranks_between_low_and_medium() {
        assert!(RiskTier::None < RiskTier::Low);
        assert!(RiskTier::Low < RiskTier::Warning);
        assert!(RiskTier::Warning < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn display_text_carries_icon_prefix() {
        assert_eq!(
            classify("hello").display_text(),
            "✅ No immediate threats detected. Stay vigilant!"
        );
        assert!(classify("login").display_text().starts_with("⚠️ Warning:"));
    }
}
