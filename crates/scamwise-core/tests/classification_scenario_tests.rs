//! Integration tests for the built-in classification scenarios.

use pretty_assertions::assert_eq;
use scamwise_core::{
    ALL_CLEAR_MESSAGE, PHISHING_MESSAGE, PRIZE_SCAM_MESSAGE, RiskTier, RiskVerdict,
    URGENCY_MESSAGE, classify,
};

#[test]
fn classification_scenario_tests_prize_scam_is_high() {
    assert_eq!(
        classify("You WIN a FREE prize!"),
        RiskVerdict::new(RiskTier::High, PRIZE_SCAM_MESSAGE)
    );
}

#[test]
fn classification_scenario_tests_urgency_is_medium() {
    assert_eq!(
        classify("This is urgent, act now"),
        RiskVerdict::new(RiskTier::Medium, URGENCY_MESSAGE)
    );
    assert_eq!(classify("Reply immediately").tier, RiskTier::Medium);
}

#[test]
fn classification_scenario_tests_credentials_are_warning() {
    assert_eq!(
        classify("Please confirm your login and password"),
        RiskVerdict::new(RiskTier::Warning, PHISHING_MESSAGE)
    );
}

#[test]
fn classification_scenario_tests_plain_text_is_all_clear() {
    assert_eq!(
        classify("Let's meet for coffee tomorrow"),
        RiskVerdict::new(RiskTier::None, ALL_CLEAR_MESSAGE)
    );
}

#[test]
fn classification_scenario_tests_empty_and_blank_are_all_clear() {
    assert_eq!(classify("").tier, RiskTier::None);
    assert_eq!(classify("   \t\n").tier, RiskTier::None);
}

#[test]
fn classification_scenario_tests_free_without_win_is_not_high() {
    assert_eq!(classify("free shipping on all orders").tier, RiskTier::None);
    assert_eq!(classify("we win together").tier, RiskTier::None);
}
