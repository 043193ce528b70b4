//! Integration tests for cascade precedence, case folding, and totality.

use pretty_assertions::assert_eq;
use scamwise_core::{BUILTIN_RULES, RiskTier, RuleCascade, classify};

#[test]
fn rule_precedence_tests_earliest_rule_wins() {
    assert_eq!(classify("free win urgent password").tier, RiskTier::High);
    assert_eq!(classify("urgent: reset your password").tier, RiskTier::Medium);
    assert_eq!(classify("immediate login required").tier, RiskTier::Medium);
}

#[test]
fn rule_precedence_tests_builtin_order_is_stable() {
    let names: Vec<&str> = BUILTIN_RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(names, vec!["prize_scam", "urgency", "credential_phishing"]);
}

#[test]
fn rule_precedence_tests_case_insensitive() {
    let upper = classify("FREE WIN");
    assert_eq!(upper, classify("Free Win"));
    assert_eq!(upper, classify("free win"));
}

#[test]
fn rule_precedence_tests_substring_matching_is_literal() {
    assert_eq!(classify("free winter jackets").tier, RiskTier::High);
    assert_eq!(classify("password123").tier, RiskTier::Warning);
    assert_eq!(classify("loginpage.example").tier, RiskTier::Warning);
}

#[test]
fn rule_precedence_tests_is_idempotent() {
    let text = "Immediate action: claim your FREE WIN now";
    assert_eq!(classify(text), classify(text));
}

#[test]
fn rule_precedence_tests_cascade_matches_free_function() {
    let cascade = RuleCascade::builtin();
    for text in ["free win", "urgent", "login", "coffee", ""] {
        assert_eq!(cascade.evaluate(text), classify(text));
    }
    assert!(cascade.matching_rule("coffee").is_none());
}

#[test]
fn rule_precedence_tests_total_over_unusual_input() {
    assert_eq!(classify("Ünïcödé 🎉 ПАРОЛЬ").tier, RiskTier::None);
    assert_eq!(classify("ＦＲＥＥ ＷＩＮ").tier, RiskTier::None);
    assert_eq!(classify("İmmediate").tier, RiskTier::None);

    let long = format!("{}URGENT", "a".repeat(1_000_000));
    assert_eq!(classify(&long).tier, RiskTier::Medium);
}

#[test]
fn rule_precedence_tests_verdict_serializes_tier_upper_case() {
    let json = serde_json::to_value(classify("login")).expect("verdict should serialize");
    assert_eq!(json["tier"], "WARNING");
}
